// src/shared/remote/slot.rs
use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

/// Where the data currently held came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Defaults,
    Remote,
}

/// `idle → loading → {ready | fallback}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteState<T> {
    pub data: T,
    pub is_loading: bool,
    pub error: Option<String>,
    pub status: LoadStatus,
    pub source: DataSource,
    #[serde(skip)]
    latest_request: u64,
}

/// Proof that a request was started; only the newest one may settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Observable state of a remote-backed store.
///
/// Every fetch or write takes a [`Ticket`]. A response is applied only when
/// its ticket is still the newest one issued; anything older is dropped, so
/// overlapping requests cannot clobber each other's outcome.
pub struct RemoteSlot<T> {
    state: watch::Sender<RemoteState<T>>,
}

impl<T> RemoteSlot<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(defaults: T) -> Self {
        let (state, _) = watch::channel(RemoteState {
            data: defaults,
            is_loading: false,
            error: None,
            status: LoadStatus::Idle,
            source: DataSource::Defaults,
            latest_request: 0,
        });
        Self { state }
    }

    pub fn snapshot(&self) -> RemoteState<T> {
        self.state.borrow().clone()
    }

    pub fn data(&self) -> T {
        self.state.borrow().data.clone()
    }

    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.state.borrow().data)
    }

    pub fn subscribe(&self) -> watch::Receiver<RemoteState<T>> {
        self.state.subscribe()
    }

    /// Starts a request. `f` may apply an optimistic change to the data and
    /// return what the caller needs to finish the request; returning `None`
    /// abandons the request without touching any state.
    pub fn begin<R>(&self, f: impl FnOnce(&mut T) -> Option<R>) -> Option<(Ticket, R)> {
        let mut started = None;
        self.state.send_if_modified(|state| match f(&mut state.data) {
            Some(out) => {
                state.latest_request += 1;
                state.is_loading = true;
                state.error = None;
                if state.status == LoadStatus::Idle {
                    state.status = LoadStatus::Loading;
                }
                started = Some((Ticket(state.latest_request), out));
                true
            }
            None => false,
        });
        started
    }

    /// Finishes a request. Applies `f` and clears the loading flag when
    /// `ticket` is the newest request; returns `false` for stale tickets.
    pub fn settle(&self, ticket: Ticket, f: impl FnOnce(&mut RemoteState<T>)) -> bool {
        let applied = self.state.send_if_modified(|state| {
            if state.latest_request != ticket.0 {
                return false;
            }
            f(state);
            state.is_loading = false;
            if state.status == LoadStatus::Loading {
                state.status = LoadStatus::Ready;
            }
            true
        });

        if !applied {
            debug!("Dropping stale response for request #{}", ticket.0);
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_defaults() {
        let slot = RemoteSlot::new(vec![1]);
        let state = slot.snapshot();

        assert_eq!(state.data, vec![1]);
        assert!(!state.is_loading);
        assert_eq!(state.status, LoadStatus::Idle);
        assert_eq!(state.source, DataSource::Defaults);
        assert_eq!(state.error, None);
    }

    #[test]
    fn begin_applies_optimistic_change_and_sets_loading() {
        let slot = RemoteSlot::new(vec![1]);
        let (_ticket, snapshot) = slot
            .begin(|data| {
                let before = data.clone();
                data.push(2);
                Some(before)
            })
            .unwrap();

        let state = slot.snapshot();
        assert_eq!(snapshot, vec![1]);
        assert_eq!(state.data, vec![1, 2]);
        assert!(state.is_loading);
        assert_eq!(state.status, LoadStatus::Loading);
    }

    #[test]
    fn abandoned_begin_changes_nothing() {
        let slot = RemoteSlot::new(vec![1]);
        let mut rx = slot.subscribe();

        let started: Option<(Ticket, ())> = slot.begin(|_| None);

        assert!(started.is_none());
        assert!(!slot.snapshot().is_loading);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn settle_clears_loading_for_latest_ticket() {
        let slot = RemoteSlot::new(0u32);
        let (ticket, ()) = slot.begin(|_| Some(())).unwrap();

        assert!(slot.settle(ticket, |s| {
            s.data = 5;
            s.source = DataSource::Remote;
        }));

        let state = slot.snapshot();
        assert_eq!(state.data, 5);
        assert!(!state.is_loading);
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.source, DataSource::Remote);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let slot = RemoteSlot::new(0u32);
        let (first, ()) = slot
            .begin(|d| {
                *d = 1;
                Some(())
            })
            .unwrap();
        let (second, ()) = slot
            .begin(|d| {
                *d = 2;
                Some(())
            })
            .unwrap();

        // The first request fails late and would roll back to 0.
        assert!(slot.settle(second, |_| {}));
        assert!(!slot.settle(first, |s| s.data = 0));

        assert_eq!(slot.data(), 2);
        assert!(!slot.snapshot().is_loading);
    }

    #[test]
    fn later_request_keeps_loading_until_it_settles() {
        let slot = RemoteSlot::new(0u32);
        let (first, ()) = slot.begin(|_| Some(())).unwrap();
        let (_second, ()) = slot.begin(|_| Some(())).unwrap();

        assert!(!slot.settle(first, |_| {}));
        assert!(slot.snapshot().is_loading);
    }
}
