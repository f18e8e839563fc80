//! Write-through cart store.
//!
//! Every operation reads the persisted cart, mutates it, and writes it
//! back before returning. There is no cached copy; the stored record is
//! the single source of truth, so concurrent writers resolve as last
//! write wins.

use crate::error::FunnelError;
use shopeze_analytics::AnalyticsEmitter;
use shopeze_commerce::cart::{Cart, CartLine, CartSnapshot};
use shopeze_commerce::catalog::Catalog;
use shopeze_commerce::ids::ProductId;
use shopeze_storage::{keys, Store};
use std::sync::Arc;
use tracing::debug;

/// Durable cart with write-through persistence and event emission.
#[derive(Debug, Clone)]
pub struct CartStore {
    store: Store,
    catalog: Arc<Catalog>,
    emitter: AnalyticsEmitter,
}

impl CartStore {
    /// Open the cart store over a durable store.
    pub fn new(store: Store, catalog: Arc<Catalog>, emitter: AnalyticsEmitter) -> Self {
        Self {
            store,
            catalog,
            emitter,
        }
    }

    /// The current cart. Missing or corrupt data reads as empty.
    pub fn load(&self) -> Cart {
        self.store.get::<Cart>(keys::CART_KEY).unwrap_or_default()
    }

    fn persist(&self, cart: &Cart) -> Result<(), FunnelError> {
        self.store.set(keys::CART_KEY, cart)?;
        Ok(())
    }

    /// Add a product, merging into an existing line.
    ///
    /// `qty` is clamped to >= 1. Unknown product ids are a silent
    /// no-op: nothing is persisted and no event fires. Emits
    /// `addToCart` with the delta quantity actually added.
    pub fn add_or_increment(&self, id: &ProductId, qty: i64) -> Result<(), FunnelError> {
        let Some(product) = self.catalog.get(id) else {
            debug!(product_id = %id, "add ignored: unknown product");
            return Ok(());
        };
        let mut cart = self.load();
        let delta = cart.add_or_increment(product, qty);
        self.persist(&cart)?;
        self.emitter.add_to_cart(product, delta);
        Ok(())
    }

    /// Adjust a line's quantity by a signed delta, flooring at 1.
    ///
    /// Returns false (and persists nothing) when the line is absent.
    /// No event fires; only add and remove are tracked.
    pub fn change_quantity(&self, id: &ProductId, delta: i64) -> Result<bool, FunnelError> {
        let mut cart = self.load();
        if !cart.change_quantity(id, delta) {
            return Ok(false);
        }
        self.persist(&cart)?;
        Ok(true)
    }

    /// Remove a line entirely.
    ///
    /// Emits `removeFromCart` carrying the quantity that existed
    /// before removal. Absent lines are a no-op with no event.
    pub fn remove(&self, id: &ProductId) -> Result<Option<CartLine>, FunnelError> {
        let mut cart = self.load();
        let Some(line) = cart.remove(id) else {
            return Ok(None);
        };
        self.persist(&cart)?;
        self.emitter.remove_from_cart(&line);
        Ok(Some(line))
    }

    /// Empty the cart by deleting the persisted record. No event.
    pub fn clear(&self) -> Result<(), FunnelError> {
        self.store.remove(keys::CART_KEY)?;
        Ok(())
    }

    /// Current lines plus derived totals.
    pub fn snapshot(&self) -> Result<CartSnapshot, FunnelError> {
        Ok(self.load().snapshot()?)
    }

    /// Sum of line quantities, for the header badge.
    pub fn total_quantity(&self) -> i64 {
        self.load().total_quantity()
    }
}
