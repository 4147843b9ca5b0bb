// src/shared/remote/service.rs
use async_trait::async_trait;
use serde_json::Value;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub ascending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectQuery {
    /// Equality filters, `column = value`.
    pub filters: Vec<(String, String)>,
    pub order: Option<OrderBy>,
    pub limit: Option<u32>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some(OrderBy {
            column: column.to_string(),
            ascending,
        });
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("Remote data service is not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Record not found")]
    NotFound,

    #[error("Write conflict: {0}")]
    Conflict(String),

    #[error("Remote service responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected remote data: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteError::Decode(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Port (table-oriented remote data service, loosely typed rows)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RemoteDataService: Send + Sync {
    /// First row of the table, if any.
    async fn select_single(&self, table: &str) -> Result<Option<Value>, RemoteError>;

    async fn select(&self, table: &str, query: SelectQuery) -> Result<Vec<Value>, RemoteError>;

    /// Returns the row as stored.
    async fn insert(&self, table: &str, row: Value) -> Result<Value, RemoteError>;

    /// `NotFound` when no row has that id.
    async fn update_by_id(&self, table: &str, id: &str, row: Value) -> Result<Value, RemoteError>;

    async fn delete_by_id(&self, table: &str, id: &str) -> Result<(), RemoteError>;
}

/// Stand-in used when no remote URL is configured; every call fails so the
/// stores keep serving their defaults.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredRemote;

#[async_trait]
impl RemoteDataService for UnconfiguredRemote {
    async fn select_single(&self, _table: &str) -> Result<Option<Value>, RemoteError> {
        Err(RemoteError::NotConfigured)
    }

    async fn select(&self, _table: &str, _query: SelectQuery) -> Result<Vec<Value>, RemoteError> {
        Err(RemoteError::NotConfigured)
    }

    async fn insert(&self, _table: &str, _row: Value) -> Result<Value, RemoteError> {
        Err(RemoteError::NotConfigured)
    }

    async fn update_by_id(
        &self,
        _table: &str,
        _id: &str,
        _row: Value,
    ) -> Result<Value, RemoteError> {
        Err(RemoteError::NotConfigured)
    }

    async fn delete_by_id(&self, _table: &str, _id: &str) -> Result<(), RemoteError> {
        Err(RemoteError::NotConfigured)
    }
}

/// Reads the `id` column of a remote row as a string.
pub fn row_id(row: &Value) -> Result<String, RemoteError> {
    match row.get("id") {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(RemoteError::Decode("row has no id column".to_string())),
    }
}
