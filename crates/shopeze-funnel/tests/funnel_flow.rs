//! End-to-end checkout journey through the full funnel.

use shopeze_analytics::{AnalyticsEmitter, AnalyticsEvent, ClickLog, EventQueue, LinkType};
use shopeze_commerce::prelude::*;
use shopeze_funnel::{Confirmation, Funnel, FunnelError};
use shopeze_storage::Store;

fn build_funnel() -> Funnel {
    let emitter = AnalyticsEmitter::new(EventQueue::new(), ClickLog::new(Store::in_memory()));
    Funnel::new(
        Catalog::demo(),
        Store::in_memory(),
        Store::in_memory(),
        emitter,
    )
}

fn event_names(funnel: &Funnel) -> Vec<&'static str> {
    funnel
        .emitter()
        .queue()
        .events()
        .iter()
        .map(|e| e.name())
        .collect()
}

#[tokio::test]
async fn test_happy_path_checkout_journey() {
    let funnel = build_funnel();
    let p101 = ProductId::new("p-101");

    // Browse and build the cart: two units of p-101 at ₹299.
    funnel.visit_page(Page::Home).unwrap();
    funnel.view_product(&p101).unwrap();
    funnel.cart().add_or_increment(&p101, 2).unwrap();

    funnel.visit_page(Page::Cart).unwrap();
    let snapshot = funnel.begin_checkout().unwrap();
    assert_eq!(snapshot.total_quantity, 2);
    assert_eq!(snapshot.total_value, Money::inr(598));

    // Checkout form.
    funnel.visit_page(Page::Checkout).unwrap();
    let order = funnel
        .submit_details(BuyerDetails::new("Asha", "asha@example.com", "12 Lane, Pune"))
        .unwrap();
    assert!(order.id.as_str().starts_with("ORD-"));
    assert_eq!(order.total, Money::inr(598));
    assert!(order.method.is_none());

    // Payment method, then payment with the order id as reference.
    funnel.visit_page(Page::PaymentMethod).unwrap();
    let order = funnel.select_method(PaymentMethod::Card).unwrap();
    assert_eq!(order.method, Some(PaymentMethod::Card));
    assert_eq!(order.method.unwrap().display_label(), "CARD");

    funnel.visit_page(Page::Payment).unwrap();
    let shown = funnel.confirm_payment(&order.id).unwrap();
    assert_eq!(shown.total.to_string(), "₹598");
    assert_eq!(shown.first_item().unwrap().id, p101);

    // Processing: settle, clear cart, keep the order for confirmation.
    funnel.visit_page(Page::Processing).unwrap();
    let settled = funnel.process(&order.id).await.unwrap();
    assert_eq!(settled.id, order.id);
    assert!(funnel.cart().load().is_empty());
    assert!(funnel.orders().get().is_some());

    // Confirmation consumes the order and emits purchase.
    funnel.visit_page(Page::Confirmation).unwrap();
    let confirmation = funnel.view_confirmation(&order.id);
    let Confirmation::Full(confirmed) = confirmation else {
        panic!("expected full confirmation, got {confirmation:?}");
    };
    assert_eq!(confirmed.total, Money::inr(598));
    assert_eq!(confirmed.items.len(), 1);
    assert_eq!(confirmed.items[0].qty, 2);

    let events = funnel.emitter().queue().events();
    let purchase = events
        .iter()
        .find_map(|e| match e {
            AnalyticsEvent::Purchase { commerce } => Some(commerce),
            _ => None,
        })
        .expect("purchase event");
    assert_eq!(purchase.order.order_id, order.id.as_str());
    assert_eq!(purchase.order.total_value, 598);
    assert_eq!(purchase.order.currency, "INR");
    assert_eq!(purchase.products.len(), 1);
    assert_eq!(purchase.products[0].product_id, "p-101");
    assert_eq!(purchase.products[0].quantity, 2);

    // Event order across the funnel.
    assert_eq!(
        event_names(&funnel),
        vec![
            "pageLoaded",
            "pageLoaded",
            "addToCart",
            "pageLoaded",
            "beginCheckout",
            "pageLoaded",
            "pageLoaded",
            "pageLoaded",
            "pageLoaded",
            "pageLoaded",
            "purchase",
        ]
    );

    // Revisiting confirmation only yields the bare id, and no second
    // purchase event.
    assert_eq!(
        funnel.view_confirmation(&order.id),
        Confirmation::BareId(order.id.clone())
    );
    let purchases = funnel
        .emitter()
        .queue()
        .events()
        .iter()
        .filter(|e| matches!(e, AnalyticsEvent::Purchase { .. }))
        .count();
    assert_eq!(purchases, 1);
}

#[tokio::test]
async fn test_mismatched_order_id_redirects_without_mutation() {
    let funnel = build_funnel();
    funnel
        .cart()
        .add_or_increment(&ProductId::new("p-101"), 1)
        .unwrap();
    let order = funnel
        .submit_details(BuyerDetails::new("Asha", "asha@example.com", "12 Lane"))
        .unwrap();
    funnel.select_method(PaymentMethod::Upi).unwrap();

    let stale = OrderId::new("ORD-stale-123");
    for err in [
        funnel.confirm_payment(&stale).unwrap_err(),
        funnel.process(&stale).await.unwrap_err(),
    ] {
        assert!(matches!(err, FunnelError::OrderMismatch));
        assert_eq!(err.redirect(), Page::Checkout);
        assert_eq!(
            err.alert_text(),
            "Problem with order. Redirecting to checkout."
        );
    }
    // Cart and held order untouched.
    assert_eq!(funnel.cart().total_quantity(), 1);
    assert_eq!(funnel.orders().get().unwrap().id, order.id);
}

#[test]
fn test_clicks_survive_in_durable_log() {
    let funnel = build_funnel();
    funnel
        .emitter()
        .link_clicked(Page::Home, "Shop Now", LinkType::Cta, "hero-section");
    funnel
        .emitter()
        .link_clicked(Page::ProductList, "Add to Cart", LinkType::Button, "grid");

    let clicks = funnel.emitter().click_log().entries();
    assert_eq!(clicks.len(), 2);
    assert_eq!(clicks[0].link_name, "Shop Now");
    assert_eq!(clicks[1].link_type, "button");
}
