// src/shared/view/derived.rs
use tokio::sync::watch;

/// A value computed from a store's state, recomputed only after the store
/// publishes a change.
pub struct DerivedView<S, V> {
    source: watch::Receiver<S>,
    compute: Box<dyn Fn(&S) -> V + Send + Sync>,
    value: V,
    computations: u64,
}

impl<S, V> DerivedView<S, V> {
    pub fn new(
        mut source: watch::Receiver<S>,
        compute: impl Fn(&S) -> V + Send + Sync + 'static,
    ) -> Self {
        let value = compute(&*source.borrow_and_update());
        Self {
            source,
            compute: Box::new(compute),
            value,
            computations: 1,
        }
    }

    /// Current value, recomputing first if the source changed.
    pub fn get(&mut self) -> &V {
        // A closed channel means the store is gone; keep the last value.
        if self.source.has_changed().unwrap_or(false) {
            self.value = (self.compute)(&*self.source.borrow_and_update());
            self.computations += 1;
        }
        &self.value
    }

    /// How many times the value has been computed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
