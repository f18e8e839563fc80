//! Page identity for the storefront funnel.
//!
//! The current stage is an explicit enum passed to any component that
//! behaves differently per page; nothing infers the page from ambient
//! state.

use serde::{Deserialize, Serialize};

/// One page of the storefront, from landing through confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    /// Landing page.
    Home,
    /// Product listing grid.
    ProductList,
    /// Single product detail.
    ProductDetail,
    /// Cart review.
    Cart,
    /// Checkout details form.
    Checkout,
    /// Payment method selector.
    PaymentMethod,
    /// Payment summary and confirm button.
    Payment,
    /// Payment processing interstitial.
    Processing,
    /// Order confirmation (terminal).
    Confirmation,
}

impl Page {
    /// The short page tag used in URLs and click records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::ProductList => "plp",
            Page::ProductDetail => "pdp",
            Page::Cart => "cart",
            Page::Checkout => "checkout",
            Page::PaymentMethod => "payment-method",
            Page::Payment => "payment",
            Page::Processing => "processing",
            Page::Confirmation => "thankyou",
        }
    }

    /// Analytics page name.
    pub fn page_name(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::ProductList => "products",
            Page::ProductDetail => "product-detail",
            Page::Cart => "cart",
            Page::Checkout => "checkout",
            Page::PaymentMethod => "payment-method",
            Page::Payment => "payment",
            Page::Processing => "processing",
            Page::Confirmation => "confirmation",
        }
    }

    /// Analytics page type.
    pub fn page_type(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::ProductList => "category",
            Page::ProductDetail => "pdp",
            Page::Cart => "cart",
            Page::Checkout | Page::PaymentMethod | Page::Payment | Page::Processing => "checkout",
            Page::Confirmation => "confirmation",
        }
    }

    /// Analytics channel.
    pub fn channel(&self) -> &'static str {
        match self {
            Page::Home => "web/home",
            Page::ProductList => "web/category",
            Page::ProductDetail => "web/product",
            Page::Cart => "web/cart",
            Page::Checkout | Page::PaymentMethod | Page::Payment | Page::Processing => {
                "web/checkout"
            }
            Page::Confirmation => "web/confirmation",
        }
    }

    /// Pseudo page URL for the analytics payloads.
    pub fn url(&self) -> String {
        format!("shopeze://{}", self.as_str())
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_tags_are_distinct() {
        let pages = [
            Page::Home,
            Page::ProductList,
            Page::ProductDetail,
            Page::Cart,
            Page::Checkout,
            Page::PaymentMethod,
            Page::Payment,
            Page::Processing,
            Page::Confirmation,
        ];
        let tags: std::collections::HashSet<_> = pages.iter().map(|p| p.as_str()).collect();
        assert_eq!(tags.len(), pages.len());
        assert_eq!(Page::Payment.url(), "shopeze://payment");
    }

    #[test]
    fn test_checkout_stages_share_channel() {
        for page in [
            Page::Checkout,
            Page::PaymentMethod,
            Page::Payment,
            Page::Processing,
        ] {
            assert_eq!(page.page_type(), "checkout");
            assert_eq!(page.channel(), "web/checkout");
        }
    }

    #[test]
    fn test_confirmation_descriptor() {
        assert_eq!(Page::Confirmation.as_str(), "thankyou");
        assert_eq!(Page::Confirmation.page_name(), "confirmation");
        assert_eq!(Page::Confirmation.channel(), "web/confirmation");
    }
}
