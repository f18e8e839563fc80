//! The checkout funnel state machine.
//!
//! Stages run Cart -> Checkout -> PaymentMethod -> Payment ->
//! Processing -> Confirmation. Each transition re-validates its
//! precondition against storage rather than trusting in-process state;
//! a stage may always be entered cold, as a fresh page load.

use crate::cart_store::CartStore;
use crate::error::FunnelError;
use crate::pending_order::PendingOrderStore;
use shopeze_analytics::{AnalyticsEmitter, PageCommerce};
use shopeze_commerce::cart::CartSnapshot;
use shopeze_commerce::catalog::{Catalog, Product};
use shopeze_commerce::ids::{OrderId, ProductId};
use shopeze_commerce::order::{BuyerDetails, Order, PaymentMethod};
use shopeze_commerce::page::Page;
use shopeze_storage::Store;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Fixed payment settle delay. Non-cancelable: once Processing is
/// entered it always reaches Confirmation after this long.
pub const SETTLE_DELAY: Duration = Duration::from_millis(1500);

/// What the confirmation stage can show.
#[derive(Debug, Clone, PartialEq)]
pub enum Confirmation {
    /// First visit with a matching order: the full summary. A
    /// `purchase` event has been emitted and the slot consumed.
    Full(Order),
    /// Revisit or mismatched id: only the requested id. No event.
    BareId(OrderId),
}

/// The storefront funnel: catalog, cart, pending order, analytics.
#[derive(Debug, Clone)]
pub struct Funnel {
    catalog: Arc<Catalog>,
    cart: CartStore,
    orders: PendingOrderStore,
    emitter: AnalyticsEmitter,
}

impl Funnel {
    /// Assemble the funnel over a durable store (cart, click log) and a
    /// session store (pending order).
    pub fn new(
        catalog: Catalog,
        durable: Store,
        session: Store,
        emitter: AnalyticsEmitter,
    ) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            cart: CartStore::new(durable, Arc::clone(&catalog), emitter.clone()),
            orders: PendingOrderStore::new(session),
            catalog,
            emitter,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn orders(&self) -> &PendingOrderStore {
        &self.orders
    }

    pub fn emitter(&self) -> &AnalyticsEmitter {
        &self.emitter
    }

    /// Record a page view.
    ///
    /// Fires `pageLoaded` exactly once, before any stage logic runs.
    /// Only the cart page carries commerce context here; product-detail
    /// views go through [`Funnel::view_product`].
    pub fn visit_page(&self, page: Page) -> Result<(), FunnelError> {
        let commerce = match page {
            Page::Cart => PageCommerce::for_cart(&self.cart.snapshot()?),
            _ => None,
        };
        self.emitter.page_loaded(page, commerce);
        Ok(())
    }

    /// Record a product-detail view, returning the product if known.
    pub fn view_product(&self, id: &ProductId) -> Option<&Product> {
        let product = self.catalog.get(id);
        self.emitter
            .page_loaded(Page::ProductDetail, product.map(PageCommerce::for_product));
        product
    }

    /// Cart -> Checkout. Requires a non-empty cart; emits
    /// `beginCheckout` with aggregate totals.
    pub fn begin_checkout(&self) -> Result<CartSnapshot, FunnelError> {
        let snapshot = self.cart.snapshot()?;
        if snapshot.is_empty() {
            return Err(FunnelError::EmptyCart);
        }
        self.emitter.begin_checkout(&snapshot);
        info!(
            total_quantity = snapshot.total_quantity,
            "checkout started"
        );
        Ok(snapshot)
    }

    /// Checkout -> PaymentMethod. Validates the buyer, freezes the
    /// cart into a new pending order.
    pub fn submit_details(&self, buyer: BuyerDetails) -> Result<Order, FunnelError> {
        let snapshot = self.cart.snapshot()?;
        if snapshot.is_empty() {
            return Err(FunnelError::NothingToOrder);
        }
        let order = self.orders.create(snapshot, buyer)?;
        info!(order_id = %order.id, total = %order.total, "order created");
        Ok(order)
    }

    /// PaymentMethod -> Payment. Requires a held order; records the
    /// chosen method. The returned order's id is the reference the
    /// payment stage must carry.
    pub fn select_method(&self, method: PaymentMethod) -> Result<Order, FunnelError> {
        let held = self.orders.get().ok_or(FunnelError::NoOrder)?;
        let order = self.orders.set_method(&held.id, method)?;
        info!(order_id = %order.id, method = method.as_str(), "payment method selected");
        Ok(order)
    }

    /// Payment -> Processing. The referenced id must match the held
    /// order; mismatch redirects and mutates nothing.
    pub fn confirm_payment(&self, id: &OrderId) -> Result<Order, FunnelError> {
        self.orders.matching(id)
    }

    /// Processing -> Confirmation. Waits out the fixed settle delay,
    /// then clears the cart and re-persists the order for the
    /// confirmation stage. There is no failure path past the id check.
    pub async fn process(&self, id: &OrderId) -> Result<Order, FunnelError> {
        let order = self.orders.matching(id)?;
        sleep(SETTLE_DELAY).await;
        self.cart.clear()?;
        self.orders.repersist(&order)?;
        info!(order_id = %order.id, "payment settled");
        Ok(order)
    }

    /// The confirmation stage.
    ///
    /// A matching held order is consumed: `purchase` is emitted and the
    /// full summary returned. Otherwise only the requested id comes
    /// back, with no event. A given order's full summary can be seen at
    /// most once per session.
    pub fn view_confirmation(&self, id: &OrderId) -> Confirmation {
        match self.orders.take(id) {
            Some(order) => {
                self.emitter.purchase(&order);
                info!(order_id = %order.id, "order confirmed");
                Confirmation::Full(order)
            }
            None => Confirmation::BareId(id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopeze_analytics::{AnalyticsEvent, ClickLog, EventQueue};
    use shopeze_commerce::money::Money;
    use shopeze_storage::Store;

    fn funnel() -> Funnel {
        let emitter = AnalyticsEmitter::new(EventQueue::new(), ClickLog::new(Store::in_memory()));
        Funnel::new(
            Catalog::demo(),
            Store::in_memory(),
            Store::in_memory(),
            emitter,
        )
    }

    fn buyer() -> BuyerDetails {
        BuyerDetails::new("Asha", "asha@example.com", "12 Lane, Pune")
    }

    #[test]
    fn test_begin_checkout_requires_items() {
        let f = funnel();
        let err = f.begin_checkout().unwrap_err();
        assert!(matches!(err, FunnelError::EmptyCart));
        assert_eq!(err.redirect(), Page::Cart);
        assert!(f.emitter().queue().is_empty());
    }

    #[test]
    fn test_begin_checkout_emits_totals() {
        let f = funnel();
        f.cart().add_or_increment(&ProductId::new("p-101"), 2).unwrap();
        let snapshot = f.begin_checkout().unwrap();
        assert_eq!(snapshot.total_value, Money::inr(598));

        match f.emitter().queue().events().last().unwrap() {
            AnalyticsEvent::BeginCheckout { commerce } => {
                assert_eq!(commerce.cart.total_quantity, 2);
                assert_eq!(commerce.cart.total_value, 598);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_select_method_without_order() {
        let f = funnel();
        assert!(matches!(
            f.select_method(PaymentMethod::Card),
            Err(FunnelError::NoOrder)
        ));
    }

    #[test]
    fn test_confirm_payment_rejects_mismatched_id() {
        let f = funnel();
        f.cart().add_or_increment(&ProductId::new("p-101"), 1).unwrap();
        let order = f.submit_details(buyer()).unwrap();

        let err = f.confirm_payment(&OrderId::new("ORD-other")).unwrap_err();
        assert!(matches!(err, FunnelError::OrderMismatch));
        assert_eq!(err.redirect(), Page::Checkout);
        // Nothing mutated: the held order and the cart are intact.
        assert_eq!(f.orders().get().unwrap().id, order.id);
        assert_eq!(f.cart().total_quantity(), 1);
    }

    #[tokio::test]
    async fn test_process_rejects_mismatched_id_before_waiting() {
        let f = funnel();
        f.cart().add_or_increment(&ProductId::new("p-101"), 1).unwrap();
        f.submit_details(buyer()).unwrap();

        assert!(matches!(
            f.process(&OrderId::new("ORD-other")).await,
            Err(FunnelError::OrderMismatch)
        ));
        assert_eq!(f.cart().total_quantity(), 1);
    }

    #[test]
    fn test_order_frozen_against_later_cart_mutation() {
        let f = funnel();
        f.cart().add_or_increment(&ProductId::new("p-101"), 2).unwrap();
        let order = f.submit_details(buyer()).unwrap();

        f.cart().add_or_increment(&ProductId::new("p-105"), 4).unwrap();
        let held = f.orders().get().unwrap();
        assert_eq!(held.items.len(), 1);
        assert_eq!(held.total, order.total);
    }

    #[test]
    fn test_view_confirmation_wrong_id_is_bare() {
        let f = funnel();
        f.cart().add_or_increment(&ProductId::new("p-101"), 1).unwrap();
        f.submit_details(buyer()).unwrap();

        let other = OrderId::new("ORD-other");
        assert_eq!(
            f.view_confirmation(&other),
            Confirmation::BareId(other.clone())
        );
        // Slot untouched, no purchase event.
        assert!(f.orders().get().is_some());
        let purchases = f
            .emitter()
            .queue()
            .events()
            .iter()
            .filter(|e| matches!(e, AnalyticsEvent::Purchase { .. }))
            .count();
        assert_eq!(purchases, 0);
    }

    #[test]
    fn test_page_views_fire_once_with_context() {
        let f = funnel();
        f.cart().add_or_increment(&ProductId::new("p-101"), 1).unwrap();

        f.visit_page(Page::Home).unwrap();
        f.visit_page(Page::Cart).unwrap();
        let product = f.view_product(&ProductId::new("p-102")).unwrap();
        assert_eq!(product.id, ProductId::new("p-102"));

        let events = f.emitter().queue().events();
        let page_loads: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                AnalyticsEvent::PageLoaded { page_load } => Some(page_load),
                _ => None,
            })
            .collect();
        assert_eq!(page_loads.len(), 3);
        assert!(page_loads[0].commerce.is_none());
        assert!(page_loads[1].commerce.is_some());
        assert!(page_loads[2].commerce.is_some());
    }
}
