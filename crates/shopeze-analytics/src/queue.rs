//! The shared, append-only event queue.

use crate::event::AnalyticsEvent;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// A page-visible, append-only event sink.
///
/// Cheap to clone; clones share the same queue. Entries are never
/// removed or mutated after push, and `push` never fails and never
/// blocks beyond the uncontended lock. Growth is bounded in practice by
/// the lifetime of a page view.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    inner: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AnalyticsEvent>> {
        // A poisoned lock still holds valid events; appending must not fail.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append an event.
    pub fn push(&self, event: AnalyticsEvent) {
        debug!(event = event.name(), "analytics event");
        self.lock().push(event);
    }

    /// Snapshot of all events pushed so far, in order.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.lock().clone()
    }

    /// Number of events pushed so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether anything has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
