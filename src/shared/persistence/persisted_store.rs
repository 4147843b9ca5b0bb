// src/shared/persistence/persisted_store.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{error, warn};

use super::storage::{KeyValueStorage, StorageError};

/// On-disk shape of every persisted store: `{ "state": ..., "version": n }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistEnvelope<S> {
    pub state: S,
    pub version: u32,
}

pub fn encode_envelope<S: Serialize>(state: &S, version: u32) -> Result<String, StorageError> {
    Ok(serde_json::to_string(&PersistEnvelope { state, version })?)
}

/// An observable state container whose every change is written through to
/// durable key-value storage under a fixed key.
pub struct PersistedStore<S> {
    key: &'static str,
    version: u32,
    storage: Arc<dyn KeyValueStorage>,
    defaults: S,
    state: watch::Sender<S>,
    revision: AtomicU64,
    // Serializes writes so an older snapshot can never land after a newer one.
    persist_lock: Mutex<()>,
}

impl<S> PersistedStore<S>
where
    S: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Restores the stored state when present, decodable and of the same
    /// version; otherwise starts from `defaults`.
    pub fn load(
        storage: Arc<dyn KeyValueStorage>,
        key: &'static str,
        version: u32,
        defaults: S,
    ) -> Self {
        let initial = match storage.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<PersistEnvelope<S>>(&raw) {
                Ok(envelope) if envelope.version == version => envelope.state,
                Ok(envelope) => {
                    warn!(
                        "Discarding '{}' stored at version {} (expected {}), using defaults",
                        key, envelope.version, version
                    );
                    defaults.clone()
                }
                Err(e) => {
                    warn!("Stored '{}' is unreadable ({}), using defaults", key, e);
                    defaults.clone()
                }
            },
            Ok(None) => defaults.clone(),
            Err(e) => {
                error!("Failed to read '{}' from storage: {}", key, e);
                defaults.clone()
            }
        };

        let (state, _) = watch::channel(initial);

        Self {
            key,
            version,
            storage,
            defaults,
            state,
            revision: AtomicU64::new(0),
            persist_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> S {
        self.state.borrow().clone()
    }

    /// Runs `f` against the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&*self.state.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state.subscribe()
    }

    /// Number of committed mutations since load.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// Applies `f` to the state. `f` returns `None` to signal a no-op, in
    /// which case subscribers are not notified and nothing is written.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut S) -> Option<R>) -> Option<R> {
        let mut outcome = None;
        self.state.send_if_modified(|state| {
            outcome = f(state);
            outcome.is_some()
        });

        if outcome.is_some() {
            self.commit();
        }
        outcome
    }

    /// Replaces the whole state.
    pub fn replace(&self, next: S) {
        self.state.send_replace(next);
        self.commit();
    }

    /// Restores the default dataset.
    pub fn reset(&self) {
        self.replace(self.defaults.clone());
    }

    fn commit(&self) {
        self.revision.fetch_add(1, Ordering::AcqRel);
        if let Err(e) = self.persist() {
            // In-memory state stays authoritative; the next mutation retries.
            error!("Failed to persist '{}': {}", self.key, e);
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        let _guard = self
            .persist_lock
            .lock()
            .map_err(|_| StorageError::Poisoned)?;
        let encoded = encode_envelope(&*self.state.borrow(), self.version)?;
        self.storage.set(self.key, &encoded)
    }
}
