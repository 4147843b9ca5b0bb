use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::shared::persistence::{KeyValueStorage, StorageError};
use crate::shared::remote::{row_id, RemoteDataService, RemoteError, SelectQuery};

/// Table-backed fake of the remote data service.
///
/// Rows live in memory per table. `fail_with` makes every following call
/// fail until `recover` is called. Each call is recorded as
/// `"<op> <table>"` so tests can assert on what was (not) sent.
#[derive(Default)]
pub struct StubRemote {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    failure: Mutex<Option<RemoteError>>,
    calls: Mutex<Vec<String>>,
}

impl StubRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(self, table: &str, rows: Vec<Value>) -> Self {
        self.tables.lock().unwrap().insert(table.to_string(), rows);
        self
    }

    pub fn failing(error: RemoteError) -> Self {
        let stub = Self::new();
        stub.fail_with(error);
        stub
    }

    pub fn fail_with(&self, error: RemoteError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn enter(&self, op: &str, table: &str) -> Result<(), RemoteError> {
        self.calls.lock().unwrap().push(format!("{op} {table}"));
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn column_text(row: &Value, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn compare_columns(a: &Value, b: &Value, column: &str) -> Ordering {
    match (a.get(column), b.get(column)) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (x, y) => column_text_of(x).cmp(&column_text_of(y)),
    }
}

fn column_text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[async_trait]
impl RemoteDataService for StubRemote {
    async fn select_single(&self, table: &str) -> Result<Option<Value>, RemoteError> {
        self.enter("select_single", table)?;
        Ok(self.rows(table).into_iter().next())
    }

    async fn select(&self, table: &str, query: SelectQuery) -> Result<Vec<Value>, RemoteError> {
        self.enter("select", table)?;

        let mut rows: Vec<Value> = self
            .rows(table)
            .into_iter()
            .filter(|row| {
                query
                    .filters
                    .iter()
                    .all(|(column, value)| column_text(row, column).as_deref() == Some(value))
            })
            .collect();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ord = compare_columns(a, b, &order.column);
                if order.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, RemoteError> {
        self.enter("insert", table)?;

        let mut row = row;
        if let Value::Object(fields) = &mut row {
            fields
                .entry("id")
                .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
        }
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        Ok(row)
    }

    async fn update_by_id(&self, table: &str, id: &str, row: Value) -> Result<Value, RemoteError> {
        self.enter("update_by_id", table)?;

        let mut tables = self.tables.lock().unwrap();
        let existing = tables
            .get_mut(table)
            .and_then(|rows| {
                rows.iter_mut()
                    .find(|r| row_id(r).map(|rid| rid == id).unwrap_or(false))
            })
            .ok_or(RemoteError::NotFound)?;

        if let (Value::Object(target), Value::Object(changes)) = (&mut *existing, row) {
            for (key, value) in changes {
                target.insert(key, value);
            }
        }
        Ok(existing.clone())
    }

    async fn delete_by_id(&self, table: &str, id: &str) -> Result<(), RemoteError> {
        self.enter("delete_by_id", table)?;

        let mut tables = self.tables.lock().unwrap();
        let rows = tables.get_mut(table).ok_or(RemoteError::NotFound)?;
        let index = rows
            .iter()
            .position(|r| row_id(r).map(|rid| rid == id).unwrap_or(false))
            .ok_or(RemoteError::NotFound)?;
        rows.remove(index);
        Ok(())
    }
}

/// Storage whose every call fails with an I/O error.
pub struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io("disk unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("disk unavailable".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("disk unavailable".to_string()))
    }
}
