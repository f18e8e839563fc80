//! Single-slot pending order store.
//!
//! The in-flight order lives in session-scoped storage between checkout
//! submission and confirmation. The slot holds at most one order;
//! creating a new one overwrites any prior uncommitted order, and the
//! confirmation stage consumes the slot exactly once.

use crate::error::FunnelError;
use shopeze_commerce::cart::CartSnapshot;
use shopeze_commerce::ids::OrderId;
use shopeze_commerce::order::{BuyerDetails, Order, PaymentMethod};
use shopeze_storage::{keys, Store};
use tracing::warn;

/// Session-scoped holder for the order being checked out.
#[derive(Debug, Clone)]
pub struct PendingOrderStore {
    store: Store,
}

impl PendingOrderStore {
    /// Open the pending-order slot over a session store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Freeze a cart snapshot into a new order and persist it.
    ///
    /// Rejects an empty snapshot and invalid buyer details. Any prior
    /// uncommitted order in the slot is overwritten.
    pub fn create(
        &self,
        snapshot: CartSnapshot,
        buyer: BuyerDetails,
    ) -> Result<Order, FunnelError> {
        let order = Order::from_snapshot(snapshot, buyer)?;
        self.store.set(keys::ORDER_KEY, &order)?;
        Ok(order)
    }

    /// The held order, if any. Corrupt data reads as absent.
    pub fn get(&self) -> Option<Order> {
        self.store.get::<Order>(keys::ORDER_KEY)
    }

    /// The held order, verified against a stage's order-id reference.
    ///
    /// Absent slot -> [`FunnelError::NoOrder`]; id mismatch ->
    /// [`FunnelError::OrderMismatch`]. Neither mutates the slot.
    pub fn matching(&self, id: &OrderId) -> Result<Order, FunnelError> {
        let order = self.get().ok_or(FunnelError::NoOrder)?;
        if &order.id != id {
            return Err(FunnelError::OrderMismatch);
        }
        Ok(order)
    }

    /// Set the payment method on the held order and re-persist it.
    ///
    /// The id guards against stale references; a mismatch changes
    /// nothing.
    pub fn set_method(&self, id: &OrderId, method: PaymentMethod) -> Result<Order, FunnelError> {
        let mut order = self.matching(id)?;
        order.set_method(method);
        self.store.set(keys::ORDER_KEY, &order)?;
        Ok(order)
    }

    /// Re-persist a finalized order so the confirmation stage can read
    /// it.
    pub fn repersist(&self, order: &Order) -> Result<(), FunnelError> {
        self.store.set(keys::ORDER_KEY, order)?;
        Ok(())
    }

    /// Consume the held order if the id matches, clearing the slot.
    ///
    /// A second call for the same id returns `None`; the confirmation
    /// summary for a given order can be produced at most once per
    /// session.
    pub fn take(&self, id: &OrderId) -> Option<Order> {
        let order = self.get()?;
        if &order.id != id {
            return None;
        }
        if let Err(e) = self.store.remove(keys::ORDER_KEY) {
            warn!(error = %e, "failed to clear pending order slot");
        }
        Some(order)
    }

    /// Drop the slot unconditionally (closing the tab).
    pub fn clear(&self) -> Result<(), FunnelError> {
        self.store.remove(keys::ORDER_KEY)?;
        Ok(())
    }
}
