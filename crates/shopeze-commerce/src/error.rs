//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Operation requires a non-empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Unknown payment method string.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Buyer detail validation failure.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
