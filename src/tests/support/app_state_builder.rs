use crate::shared::persistence::{InMemoryStorage, KeyValueStorage};
use crate::shared::remote::{RemoteDataService, UnconfiguredRemote};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    storage: Arc<dyn KeyValueStorage>,
    remote: Arc<dyn RemoteDataService>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            storage: Arc::new(InMemoryStorage::new()),
            remote: Arc::new(UnconfiguredRemote),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_storage(mut self, storage: Arc<dyn KeyValueStorage>) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_remote(mut self, remote: Arc<dyn RemoteDataService>) -> Self {
        self.remote = remote;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState::new(self.storage, self.remote))
    }
}
