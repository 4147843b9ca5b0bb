pub mod profile_store;
pub mod rest_client;
pub mod service;
pub mod slot;

pub use profile_store::{ProfileRecord, ProfileStore};
pub use rest_client::RestTableClient;
pub use service::{row_id, RemoteDataService, RemoteError, SelectQuery, UnconfiguredRemote};
pub use slot::{DataSource, LoadStatus, RemoteSlot, RemoteState, Ticket};
