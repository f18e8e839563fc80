//! Durable bounded click log.
//!
//! Every `linkClicked` event is also written to durable storage as a
//! flat record, capped at [`CLICK_LOG_CAP`] entries with oldest-first
//! eviction. This is the only durable analytics artifact; the event
//! queue itself lives and dies with the page view.

use serde::{Deserialize, Serialize};
use shopeze_storage::{keys, Store};
use tracing::warn;

/// Maximum retained click records.
pub const CLICK_LOG_CAP: usize = 50;

/// One stored click.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClickRecord {
    /// Unix timestamp of the click.
    pub timestamp: i64,
    /// Always "linkClicked".
    pub event: String,
    #[serde(rename = "linkName")]
    pub link_name: String,
    #[serde(rename = "linkType")]
    pub link_type: String,
    #[serde(rename = "linkPosition")]
    pub link_position: String,
}

/// Append-only, bounded click log over durable storage.
#[derive(Debug, Clone)]
pub struct ClickLog {
    store: Store,
}

impl ClickLog {
    /// Open the click log over a durable store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Append a record, evicting the oldest past the cap.
    ///
    /// Write failures are logged and swallowed: analytics must never
    /// block or fail the interaction that produced them.
    pub fn append(&self, record: ClickRecord) {
        let mut log = self.entries();
        log.push(record);
        while log.len() > CLICK_LOG_CAP {
            log.remove(0);
        }
        if let Err(e) = self.store.set(keys::CLICK_LOG_KEY, &log) {
            warn!(error = %e, "failed to persist click log");
        }
    }

    /// All stored records, oldest first. Corrupt or missing data reads
    /// as empty.
    pub fn entries(&self) -> Vec<ClickRecord> {
        self.store
            .get::<Vec<ClickRecord>>(keys::CLICK_LOG_KEY)
            .unwrap_or_default()
    }

    /// Drop all stored records.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(keys::CLICK_LOG_KEY) {
            warn!(error = %e, "failed to clear click log");
        }
    }
}
