use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::modules::testimonial::adapter::outgoing::remote_row::{
    from_row, to_row, ORDER_COLUMN, TABLE,
};
use crate::modules::testimonial::domain::entities::{
    default_testimonials, NewTestimonial, Testimonial, TestimonialPatch,
};
use crate::shared::id::unique_id;
use crate::shared::remote::{
    DataSource, LoadStatus, RemoteDataService, RemoteError, RemoteSlot, RemoteState, SelectQuery,
    Ticket,
};

/// Remote-backed testimonial list.
///
/// Every mutation is applied locally first and rolled back to the
/// pre-call list if the remote write fails. Unknown ids never reach the
/// remote service.
pub struct TestimonialStore {
    slot: RemoteSlot<Vec<Testimonial>>,
    remote: Arc<dyn RemoteDataService>,
}

impl TestimonialStore {
    pub fn new(remote: Arc<dyn RemoteDataService>) -> Self {
        Self {
            slot: RemoteSlot::new(default_testimonials()),
            remote,
        }
    }

    pub fn state(&self) -> RemoteState<Vec<Testimonial>> {
        self.slot.snapshot()
    }

    pub fn all(&self) -> Vec<Testimonial> {
        self.slot.data()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Testimonial> {
        self.slot
            .read(|list| list.iter().find(|t| t.id == id).cloned())
    }

    pub fn subscribe(&self) -> watch::Receiver<RemoteState<Vec<Testimonial>>> {
        self.slot.subscribe()
    }

    pub async fn fetch(&self) -> Result<Vec<Testimonial>, RemoteError> {
        let Some((ticket, ())) = self.slot.begin(|_| Some(())) else {
            return Ok(self.slot.data());
        };

        let query = SelectQuery::new().order_by(ORDER_COLUMN, true);
        let loaded = match self.remote.select(TABLE, query).await {
            Ok(rows) => rows.into_iter().map(from_row).collect::<Result<Vec<_>, _>>(),
            Err(e) => Err(e),
        };

        match loaded {
            Ok(list) => {
                let data = list.clone();
                self.slot.settle(ticket, move |state| {
                    state.data = data;
                    state.status = LoadStatus::Ready;
                    state.source = DataSource::Remote;
                });
                info!("Loaded {} testimonials from remote", list.len());
                Ok(list)
            }
            Err(e) => {
                warn!("Failed to load testimonials, using fallback: {}", e);
                let message = format!("Failed to load testimonials: {e}");
                self.slot.settle(ticket, move |state| {
                    state.error = Some(message);
                    state.status = LoadStatus::Fallback;
                });
                Err(e)
            }
        }
    }

    pub async fn add(&self, new_testimonial: NewTestimonial) -> Result<Testimonial, RemoteError> {
        let local_id = self
            .slot
            .read(|list| unique_id(|candidate| list.iter().any(|t| t.id == candidate)));
        let optimistic = new_testimonial.into_testimonial(local_id.clone());

        let Some((ticket, previous)) = self.slot.begin(|list| {
            let previous = list.clone();
            list.push(optimistic.clone());
            Some(previous)
        }) else {
            return Ok(optimistic);
        };

        let stored = match to_row(&optimistic) {
            Ok(row) => match self.remote.insert(TABLE, row).await {
                Ok(row) => from_row(row),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };

        match stored {
            Ok(stored) => {
                let confirmed = stored.clone();
                self.slot.settle(ticket, move |state| {
                    // The remote side assigns the canonical id.
                    if let Some(entry) = state.data.iter_mut().find(|t| t.id == local_id) {
                        *entry = confirmed;
                    }
                    state.status = LoadStatus::Ready;
                    state.source = DataSource::Remote;
                });
                info!("Testimonial {} added", stored.id);
                Ok(stored)
            }
            Err(e) => Err(self.roll_back(ticket, previous, "add", e)),
        }
    }

    /// `Ok(None)` when no testimonial has `id`.
    pub async fn update(
        &self,
        id: &str,
        patch: TestimonialPatch,
    ) -> Result<Option<Testimonial>, RemoteError> {
        let Some((ticket, (previous, merged))) = self.slot.begin(|list| {
            let previous = list.clone();
            let entry = list.iter_mut().find(|t| t.id == id)?;
            patch.apply(entry);
            Some((previous, entry.clone()))
        }) else {
            return Ok(None);
        };

        let written = match to_row(&merged) {
            Ok(row) => self.remote.update_by_id(TABLE, id, row).await.map(|_| ()),
            Err(e) => Err(e),
        };

        match written {
            Ok(()) => {
                self.slot.settle(ticket, |state| {
                    state.status = LoadStatus::Ready;
                    state.source = DataSource::Remote;
                });
                Ok(Some(merged))
            }
            Err(e) => Err(self.roll_back(ticket, previous, "update", e)),
        }
    }

    /// `Ok(false)` when no testimonial has `id`.
    pub async fn delete(&self, id: &str) -> Result<bool, RemoteError> {
        let Some((ticket, previous)) = self.slot.begin(|list| {
            let index = list.iter().position(|t| t.id == id)?;
            let previous = list.clone();
            list.remove(index);
            Some(previous)
        }) else {
            return Ok(false);
        };

        match self.remote.delete_by_id(TABLE, id).await {
            Ok(()) => {
                self.slot.settle(ticket, |_| {});
                info!("Testimonial {} deleted", id);
                Ok(true)
            }
            Err(e) => Err(self.roll_back(ticket, previous, "delete", e)),
        }
    }

    fn roll_back(
        &self,
        ticket: Ticket,
        previous: Vec<Testimonial>,
        action: &str,
        error: RemoteError,
    ) -> RemoteError {
        warn!("Failed to {} testimonial, rolling back: {}", action, error);
        let message = format!("Failed to {action} testimonial: {error}");
        self.slot.settle(ticket, move |state| {
            state.data = previous;
            state.error = Some(message);
        });
        error
    }
}
