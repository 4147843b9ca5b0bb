use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::shared::remote::{RemoteDataService, RemoteError, SelectQuery};

mock! {
    pub Remote {}
    #[async_trait]
    impl RemoteDataService for Remote {
        async fn select_single(&self, table: &str) -> Result<Option<Value>, RemoteError>;

        async fn select(&self, table: &str, query: SelectQuery) -> Result<Vec<Value>, RemoteError>;

        async fn insert(&self, table: &str, row: Value) -> Result<Value, RemoteError>;

        async fn update_by_id(
            &self,
            table: &str,
            id: &str,
            row: Value,
        ) -> Result<Value, RemoteError>;

        async fn delete_by_id(&self, table: &str, id: &str) -> Result<(), RemoteError>;
    }
}
