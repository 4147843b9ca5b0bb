pub mod file_storage;
pub mod persisted_store;
pub mod seed;
pub mod storage;

pub use file_storage::FileStorage;
pub use persisted_store::{encode_envelope, PersistEnvelope, PersistedStore};
pub use seed::{seed_defaults, Seed};
pub use storage::{InMemoryStorage, KeyValueStorage, StorageError};
