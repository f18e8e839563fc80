//! The six analytics event shapes.
//!
//! Serialized field names follow the XDM data layer contract
//! (`xdmPageLoad`, `xdmCommerce`, `productID`, …); downstream collection
//! depends on these exact names.

use serde::{Deserialize, Serialize};
use shopeze_commerce::cart::{CartLine, CartSnapshot};
use shopeze_commerce::catalog::Product;
use shopeze_commerce::order::Order;
use shopeze_commerce::page::Page;

/// Fixed product category for cart/purchase events.
pub const DEFAULT_CATEGORY: &str = "General";

/// Site name carried in every page descriptor.
pub const SITE_NAME: &str = "Shopeze";

/// A normalized analytics event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event")]
pub enum AnalyticsEvent {
    #[serde(rename = "pageLoaded")]
    PageLoaded {
        #[serde(rename = "xdmPageLoad")]
        page_load: PageLoadPayload,
    },
    #[serde(rename = "linkClicked")]
    LinkClicked {
        #[serde(rename = "xdmActionDetails")]
        action: ActionDetails,
    },
    #[serde(rename = "addToCart")]
    AddToCart {
        #[serde(rename = "xdmCommerce")]
        commerce: ProductCommerce,
    },
    #[serde(rename = "removeFromCart")]
    RemoveFromCart {
        #[serde(rename = "xdmCommerce")]
        commerce: ProductCommerce,
    },
    #[serde(rename = "beginCheckout")]
    BeginCheckout {
        #[serde(rename = "xdmCommerce")]
        commerce: CartCommerce,
    },
    #[serde(rename = "purchase")]
    Purchase {
        #[serde(rename = "xdmCommerce")]
        commerce: PurchaseCommerce,
    },
}

impl AnalyticsEvent {
    /// The event tag name.
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageLoaded { .. } => "pageLoaded",
            AnalyticsEvent::LinkClicked { .. } => "linkClicked",
            AnalyticsEvent::AddToCart { .. } => "addToCart",
            AnalyticsEvent::RemoveFromCart { .. } => "removeFromCart",
            AnalyticsEvent::BeginCheckout { .. } => "beginCheckout",
            AnalyticsEvent::Purchase { .. } => "purchase",
        }
    }
}

/// Customer context: guest desktop visitor by default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerContext {
    /// "guest" | "logged-in".
    #[serde(rename = "loginStatus")]
    pub login_status: String,
    /// "desktop web" | "mobile web" | "app".
    pub platform: String,
    /// ISO language code.
    pub language: String,
}

impl Default for CustomerContext {
    fn default() -> Self {
        Self {
            login_status: "guest".to_string(),
            platform: "desktop web".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Page descriptor inside `pageLoaded`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebPageDetails {
    #[serde(rename = "siteName")]
    pub site_name: String,
    #[serde(rename = "pageName")]
    pub page_name: String,
    #[serde(rename = "pageType")]
    pub page_type: String,
    pub channel: String,
    #[serde(rename = "pageURL")]
    pub page_url: String,
}

impl WebPageDetails {
    /// Build the descriptor for a page.
    pub fn for_page(page: Page) -> Self {
        Self {
            site_name: SITE_NAME.to_string(),
            page_name: page.page_name().to_string(),
            page_type: page.page_type().to_string(),
            channel: page.channel().to_string(),
            page_url: page.url(),
        }
    }
}

/// `pageLoaded` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageLoadPayload {
    #[serde(rename = "custData")]
    pub customer: CustomerContext,
    pub web: PageLoadWeb,
    /// Present only on the product-detail and cart pages.
    #[serde(rename = "xdmCommerce", skip_serializing_if = "Option::is_none")]
    pub commerce: Option<PageCommerce>,
}

/// Web block wrapping the page descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageLoadWeb {
    #[serde(rename = "webPageDetails")]
    pub page_details: WebPageDetails,
}

/// Commerce context attached to a `pageLoaded` event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PageCommerce {
    /// Product-detail page: the single viewed product.
    Viewed { product: ViewedProduct },
    /// Cart page: every line plus aggregate totals.
    CartContents {
        products: Vec<ListedProduct>,
        order: CartTotals,
    },
}

impl PageCommerce {
    /// Context for the product-detail page.
    pub fn for_product(product: &Product) -> Self {
        PageCommerce::Viewed {
            product: ViewedProduct {
                product_id: product.id.to_string(),
                product_name: product.title.clone(),
                price: product.price.amount_minor,
            },
        }
    }

    /// Context for the cart page. Empty carts get no context.
    pub fn for_cart(snapshot: &CartSnapshot) -> Option<Self> {
        if snapshot.is_empty() {
            return None;
        }
        Some(PageCommerce::CartContents {
            products: snapshot.lines.iter().map(ListedProduct::from_line).collect(),
            order: CartTotals {
                total_quantity: snapshot.total_quantity,
                total_value: snapshot.total_value.amount_minor,
            },
        })
    }
}

/// The single product viewed on a product-detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewedProduct {
    #[serde(rename = "productID")]
    pub product_id: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub price: i64,
}

/// One cart line inside a page-load or purchase product list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListedProduct {
    #[serde(rename = "productID")]
    pub product_id: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub price: i64,
    pub quantity: i64,
}

impl ListedProduct {
    fn from_line(line: &CartLine) -> Self {
        Self {
            product_id: line.id.to_string(),
            product_name: line.title.clone(),
            price: line.price.amount_minor,
            quantity: line.qty,
        }
    }
}

/// Aggregate cart totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    #[serde(rename = "totalQuantity")]
    pub total_quantity: i64,
    #[serde(rename = "totalValue")]
    pub total_value: i64,
}

/// `linkClicked` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionDetails {
    pub web: ActionWeb,
}

/// Web block wrapping the interaction record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionWeb {
    #[serde(rename = "webInteraction")]
    pub interaction: WebInteraction,
}

/// Click-level interaction info.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebInteraction {
    #[serde(rename = "linkName")]
    pub link_name: String,
    #[serde(rename = "linkType")]
    pub link_type: LinkType,
    #[serde(rename = "linkPosition")]
    pub link_position: String,
    #[serde(rename = "linkPageName")]
    pub link_page_name: String,
    #[serde(rename = "pageURL")]
    pub page_url: String,
}

/// Where a click came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Nav,
    Cta,
    Banner,
    Card,
    Footer,
    Link,
    Button,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Nav => "nav",
            LinkType::Cta => "cta",
            LinkType::Banner => "banner",
            LinkType::Card => "card",
            LinkType::Footer => "footer",
            LinkType::Link => "link",
            LinkType::Button => "button",
        }
    }
}

/// `addToCart` / `removeFromCart` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCommerce {
    pub product: CartEventProduct,
}

/// Product info for cart mutation events.
///
/// `quantity` is the delta added for `addToCart` and the pre-removal
/// quantity for `removeFromCart`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEventProduct {
    #[serde(rename = "productID")]
    pub product_id: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub category: String,
    pub price: i64,
    pub quantity: i64,
}

/// `beginCheckout` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartCommerce {
    pub cart: CartTotals,
}

/// `purchase` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseCommerce {
    pub order: PurchaseOrder,
    pub products: Vec<PurchasedProduct>,
}

impl PurchaseCommerce {
    /// Build the purchase payload from a finalized order.
    pub fn from_order(order: &Order) -> Self {
        Self {
            order: PurchaseOrder {
                order_id: order.id.to_string(),
                total_value: order.total.amount_minor,
                currency: order.total.currency.code().to_string(),
            },
            products: order
                .items
                .iter()
                .map(|line| PurchasedProduct {
                    product_id: line.id.to_string(),
                    product_name: line.title.clone(),
                    category: DEFAULT_CATEGORY.to_string(),
                    price: line.price.amount_minor,
                    quantity: line.qty,
                })
                .collect(),
        }
    }
}

/// Order-level purchase info.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrder {
    #[serde(rename = "orderID")]
    pub order_id: String,
    #[serde(rename = "totalValue")]
    pub total_value: i64,
    pub currency: String,
}

/// One purchased line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchasedProduct {
    #[serde(rename = "productID")]
    pub product_id: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub category: String,
    pub price: i64,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopeze_commerce::cart::Cart;
    use shopeze_commerce::catalog::Catalog;
    use shopeze_commerce::ids::ProductId;
    use shopeze_commerce::order::BuyerDetails;

    #[test]
    fn test_event_tag_names() {
        let event = AnalyticsEvent::BeginCheckout {
            commerce: CartCommerce {
                cart: CartTotals {
                    total_quantity: 2,
                    total_value: 598,
                },
            },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "beginCheckout");
        assert_eq!(json["xdmCommerce"]["cart"]["totalQuantity"], 2);
        assert_eq!(json["xdmCommerce"]["cart"]["totalValue"], 598);
    }

    #[test]
    fn test_page_loaded_wire_shape() {
        let payload = PageLoadPayload {
            customer: CustomerContext::default(),
            web: PageLoadWeb {
                page_details: WebPageDetails::for_page(Page::Cart),
            },
            commerce: None,
        };
        let json = serde_json::to_value(AnalyticsEvent::PageLoaded { page_load: payload }).unwrap();
        assert_eq!(json["event"], "pageLoaded");
        assert_eq!(json["xdmPageLoad"]["custData"]["loginStatus"], "guest");
        assert_eq!(
            json["xdmPageLoad"]["web"]["webPageDetails"]["siteName"],
            "Shopeze"
        );
        assert_eq!(json["xdmPageLoad"]["web"]["webPageDetails"]["pageName"], "cart");
        // No commerce block serialized when absent.
        assert!(json["xdmPageLoad"].get("xdmCommerce").is_none());
    }

    #[test]
    fn test_page_commerce_for_empty_cart() {
        let snapshot = Cart::default().snapshot().unwrap();
        assert!(PageCommerce::for_cart(&snapshot).is_none());
    }

    #[test]
    fn test_purchase_from_order() {
        let catalog = Catalog::demo();
        let mut cart = Cart::default();
        cart.add_or_increment(catalog.get(&ProductId::new("p-101")).unwrap(), 2);
        let order = shopeze_commerce::order::Order::from_snapshot(
            cart.snapshot().unwrap(),
            BuyerDetails::new("A", "a@b.com", "x"),
        )
        .unwrap();

        let commerce = PurchaseCommerce::from_order(&order);
        assert_eq!(commerce.order.total_value, 598);
        assert_eq!(commerce.order.currency, "INR");
        assert_eq!(commerce.products.len(), 1);
        assert_eq!(commerce.products[0].product_id, "p-101");
        assert_eq!(commerce.products[0].quantity, 2);
        assert_eq!(commerce.products[0].category, DEFAULT_CATEGORY);

        let json = serde_json::to_value(AnalyticsEvent::Purchase { commerce }).unwrap();
        assert_eq!(json["xdmCommerce"]["order"]["currency"], "INR");
        assert_eq!(json["xdmCommerce"]["products"][0]["productID"], "p-101");
    }

    #[test]
    fn test_link_type_serializes_lowercase() {
        assert_eq!(serde_json::to_value(LinkType::Cta).unwrap(), "cta");
        assert_eq!(LinkType::Button.as_str(), "button");
    }
}
