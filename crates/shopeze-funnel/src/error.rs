//! Funnel errors.
//!
//! Every precondition failure carries a user-facing alert text (the
//! `Display` impl) and a stage to redirect the buyer to. No stage ever
//! renders derived totals from a missing or mismatched order; it
//! surfaces one of these instead.

use shopeze_commerce::page::Page;
use shopeze_commerce::CommerceError;
use shopeze_storage::StorageError;
use thiserror::Error;

/// Checkout funnel errors.
#[derive(Debug, Error)]
pub enum FunnelError {
    /// Proceed-to-checkout pressed with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout form submitted while the cart is empty.
    #[error("Cart empty")]
    NothingToOrder,

    /// A payment stage reached with no order in the session.
    #[error("No order found. Go to checkout.")]
    NoOrder,

    /// The referenced order id does not match the session-held order.
    #[error("Problem with order. Redirecting to checkout.")]
    OrderMismatch,

    /// Domain-level failure (validation, overflow).
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Persistence failure on a write-through operation.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl FunnelError {
    /// The stage the buyer is sent back to.
    pub fn redirect(&self) -> Page {
        match self {
            FunnelError::EmptyCart => Page::Cart,
            FunnelError::NothingToOrder
            | FunnelError::NoOrder
            | FunnelError::OrderMismatch
            | FunnelError::Commerce(_)
            | FunnelError::Storage(_) => Page::Checkout,
        }
    }

    /// The blocking alert text shown before redirecting.
    pub fn alert_text(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_targets() {
        assert_eq!(FunnelError::EmptyCart.redirect(), Page::Cart);
        assert_eq!(FunnelError::NoOrder.redirect(), Page::Checkout);
        assert_eq!(FunnelError::OrderMismatch.redirect(), Page::Checkout);
    }

    #[test]
    fn test_alert_text_matches_display() {
        assert_eq!(
            FunnelError::OrderMismatch.alert_text(),
            "Problem with order. Redirecting to checkout."
        );
    }
}
