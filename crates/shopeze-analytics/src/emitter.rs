//! The analytics emitter.
//!
//! One emitter handle is injected into every component that produces
//! events. Emitting never fails and never blocks; each event goes to
//! the shared queue synchronously at its transition point, with no
//! batching or deduplication.

use crate::click_log::{ClickLog, ClickRecord};
use crate::event::{
    ActionDetails, ActionWeb, AnalyticsEvent, CartCommerce, CartEventProduct, CartTotals,
    CustomerContext, LinkType, PageCommerce, PageLoadPayload, PageLoadWeb, ProductCommerce,
    PurchaseCommerce, WebInteraction, WebPageDetails, DEFAULT_CATEGORY,
};
use crate::queue::EventQueue;
use shopeze_commerce::cart::{CartLine, CartSnapshot};
use shopeze_commerce::catalog::Product;
use shopeze_commerce::order::Order;
use shopeze_commerce::page::Page;

/// Builds and emits the six event shapes.
#[derive(Debug, Clone)]
pub struct AnalyticsEmitter {
    queue: EventQueue,
    click_log: ClickLog,
    customer: CustomerContext,
}

impl AnalyticsEmitter {
    /// Create an emitter over a queue and click log, with the default
    /// guest customer context.
    pub fn new(queue: EventQueue, click_log: ClickLog) -> Self {
        Self {
            queue,
            click_log,
            customer: CustomerContext::default(),
        }
    }

    /// Override the customer context.
    pub fn with_customer(mut self, customer: CustomerContext) -> Self {
        self.customer = customer;
        self
    }

    /// The underlying queue.
    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    /// The underlying click log.
    pub fn click_log(&self) -> &ClickLog {
        &self.click_log
    }

    /// Emit `pageLoaded` for a page view.
    ///
    /// Must fire exactly once per page view, before any page-specific
    /// logic. `commerce` carries the viewed product (product-detail) or
    /// the cart contents (cart page); every other page passes `None`.
    pub fn page_loaded(&self, page: Page, commerce: Option<PageCommerce>) {
        self.queue.push(AnalyticsEvent::PageLoaded {
            page_load: PageLoadPayload {
                customer: self.customer.clone(),
                web: PageLoadWeb {
                    page_details: WebPageDetails::for_page(page),
                },
                commerce,
            },
        });
    }

    /// Emit `linkClicked` and durably log the click.
    pub fn link_clicked(
        &self,
        page: Page,
        link_name: &str,
        link_type: LinkType,
        link_position: &str,
    ) {
        self.queue.push(AnalyticsEvent::LinkClicked {
            action: ActionDetails {
                web: ActionWeb {
                    interaction: WebInteraction {
                        link_name: link_name.to_string(),
                        link_type,
                        link_position: link_position.to_string(),
                        link_page_name: page.as_str().to_string(),
                        page_url: page.url(),
                    },
                },
            },
        });
        self.click_log.append(ClickRecord {
            timestamp: current_timestamp(),
            event: "linkClicked".to_string(),
            link_name: link_name.to_string(),
            link_type: link_type.as_str().to_string(),
            link_position: link_position.to_string(),
        });
    }

    /// Emit `addToCart` with the delta quantity added (not the new
    /// line total).
    pub fn add_to_cart(&self, product: &Product, qty_delta: i64) {
        self.queue.push(AnalyticsEvent::AddToCart {
            commerce: ProductCommerce {
                product: CartEventProduct {
                    product_id: product.id.to_string(),
                    product_name: product.title.clone(),
                    category: DEFAULT_CATEGORY.to_string(),
                    price: product.price.amount_minor,
                    quantity: qty_delta,
                },
            },
        });
    }

    /// Emit `removeFromCart` with the quantity that existed before
    /// removal.
    pub fn remove_from_cart(&self, line: &CartLine) {
        self.queue.push(AnalyticsEvent::RemoveFromCart {
            commerce: ProductCommerce {
                product: CartEventProduct {
                    product_id: line.id.to_string(),
                    product_name: line.title.clone(),
                    category: DEFAULT_CATEGORY.to_string(),
                    price: line.price.amount_minor,
                    quantity: line.qty,
                },
            },
        });
    }

    /// Emit `beginCheckout` with aggregate cart totals.
    pub fn begin_checkout(&self, snapshot: &CartSnapshot) {
        self.queue.push(AnalyticsEvent::BeginCheckout {
            commerce: CartCommerce {
                cart: CartTotals {
                    total_quantity: snapshot.total_quantity,
                    total_value: snapshot.total_value.amount_minor,
                },
            },
        });
    }

    /// Emit `purchase` for a finalized order.
    pub fn purchase(&self, order: &Order) {
        self.queue.push(AnalyticsEvent::Purchase {
            commerce: PurchaseCommerce::from_order(order),
        });
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopeze_commerce::cart::Cart;
    use shopeze_commerce::catalog::Catalog;
    use shopeze_commerce::ids::ProductId;
    use shopeze_storage::Store;

    fn emitter() -> AnalyticsEmitter {
        AnalyticsEmitter::new(EventQueue::new(), ClickLog::new(Store::in_memory()))
    }

    #[test]
    fn test_add_to_cart_carries_delta() {
        let e = emitter();
        let catalog = Catalog::demo();
        let product = catalog.get(&ProductId::new("p-101")).unwrap();
        e.add_to_cart(product, 3);

        let events = e.queue().events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            AnalyticsEvent::AddToCart { commerce } => {
                assert_eq!(commerce.product.quantity, 3);
                assert_eq!(commerce.product.price, 299);
                assert_eq!(commerce.product.category, DEFAULT_CATEGORY);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_link_clicked_also_logs_durably() {
        let e = emitter();
        e.link_clicked(Page::Home, "Shop Now", LinkType::Cta, "hero-section");
        assert_eq!(e.queue().len(), 1);

        let clicks = e.click_log().entries();
        assert_eq!(clicks.len(), 1);
        assert_eq!(clicks[0].link_name, "Shop Now");
        assert_eq!(clicks[0].link_type, "cta");
    }

    #[test]
    fn test_page_loaded_cart_context() {
        let e = emitter();
        let catalog = Catalog::demo();
        let mut cart = Cart::default();
        cart.add_or_increment(catalog.get(&ProductId::new("p-101")).unwrap(), 2);
        let snapshot = cart.snapshot().unwrap();

        e.page_loaded(Page::Cart, PageCommerce::for_cart(&snapshot));

        match &e.queue().events()[0] {
            AnalyticsEvent::PageLoaded { page_load } => {
                assert!(page_load.commerce.is_some());
                assert_eq!(page_load.web.page_details.page_name, "cart");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
