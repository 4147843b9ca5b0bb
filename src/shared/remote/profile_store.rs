// src/shared/remote/profile_store.rs
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

use super::service::{row_id, RemoteDataService, RemoteError};
use super::slot::{DataSource, LoadStatus, RemoteSlot, RemoteState};

/// A single "profile" record kept in one remote table row.
pub trait ProfileRecord: Clone + Serialize + Send + Sync + 'static {
    type Patch: Send;

    /// Remote table holding the record.
    const TABLE: &'static str;

    /// Human readable name used in error messages.
    const LABEL: &'static str;

    fn defaults() -> Self;

    /// Maps a remote row into the local shape, filling gaps with defaults.
    fn from_row(row: Value) -> Result<Self, RemoteError>;

    fn to_row(&self) -> Result<Value, RemoteError>;

    fn apply(&mut self, patch: Self::Patch);
}

/// Remote-backed store for a single record: hydrate from the remote table,
/// fall back to defaults, and write through optimistic partial updates.
pub struct ProfileStore<R: ProfileRecord> {
    slot: RemoteSlot<R>,
    remote: Arc<dyn RemoteDataService>,
}

impl<R: ProfileRecord> ProfileStore<R> {
    pub fn new(remote: Arc<dyn RemoteDataService>) -> Self {
        Self {
            slot: RemoteSlot::new(R::defaults()),
            remote,
        }
    }

    pub fn state(&self) -> RemoteState<R> {
        self.slot.snapshot()
    }

    pub fn data(&self) -> R {
        self.slot.data()
    }

    pub fn subscribe(&self) -> watch::Receiver<RemoteState<R>> {
        self.slot.subscribe()
    }

    /// Loads the record from the remote table. On any failure, including an
    /// empty table, the current data is kept and the error is recorded.
    pub async fn fetch(&self) -> Result<R, RemoteError> {
        let Some((ticket, ())) = self.slot.begin(|_| Some(())) else {
            return Ok(self.slot.data());
        };

        let loaded = match self.remote.select_single(R::TABLE).await {
            Ok(Some(row)) => R::from_row(row),
            Ok(None) => Err(RemoteError::NotFound),
            Err(e) => Err(e),
        };

        match loaded {
            Ok(record) => {
                let data = record.clone();
                self.slot.settle(ticket, move |state| {
                    state.data = data;
                    state.status = LoadStatus::Ready;
                    state.source = DataSource::Remote;
                });
                info!("Loaded {} content from remote", R::LABEL);
                Ok(record)
            }
            Err(e) => {
                warn!("Failed to load {} content, using fallback: {}", R::LABEL, e);
                let message = format!("Failed to load {}: {}", R::LABEL, e);
                self.slot.settle(ticket, move |state| {
                    state.error = Some(message);
                    state.status = LoadStatus::Fallback;
                });
                Err(e)
            }
        }
    }

    /// Applies `patch` immediately, then writes the merged record through.
    /// A failed write restores the record as it was before this call.
    pub async fn update(&self, patch: R::Patch) -> Result<R, RemoteError> {
        let Some((ticket, (previous, merged))) = self.slot.begin(|data| {
            let previous = data.clone();
            data.apply(patch);
            Some((previous, data.clone()))
        }) else {
            return Ok(self.slot.data());
        };

        match self.write_through(&merged).await {
            Ok(()) => {
                self.slot.settle(ticket, |state| {
                    state.status = LoadStatus::Ready;
                    state.source = DataSource::Remote;
                });
                Ok(merged)
            }
            Err(e) => {
                warn!("Failed to save {} content, rolling back: {}", R::LABEL, e);
                let message = format!("Failed to save {}: {}", R::LABEL, e);
                self.slot.settle(ticket, move |state| {
                    state.data = previous;
                    state.error = Some(message);
                });
                Err(e)
            }
        }
    }

    /// Check existence, then update the existing row or insert a new one.
    async fn write_through(&self, record: &R) -> Result<(), RemoteError> {
        let row = record.to_row()?;

        match self.remote.select_single(R::TABLE).await? {
            Some(existing) => {
                let id = row_id(&existing)?;
                self.remote.update_by_id(R::TABLE, &id, row).await?;
            }
            None => {
                self.remote.insert(R::TABLE, row).await?;
            }
        }
        Ok(())
    }
}
