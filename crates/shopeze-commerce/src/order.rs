//! Order types.
//!
//! An order is a frozen snapshot of the cart plus buyer details. Once
//! created, its items and total never change; only the payment method
//! may be set before finalization.

use crate::cart::{CartLine, CartSnapshot};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Buyer-supplied checkout form fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuyerDetails {
    /// Buyer name.
    pub name: String,
    /// Buyer email.
    pub email: String,
    /// Delivery address.
    pub address: String,
}

impl BuyerDetails {
    /// Create buyer details.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Validate the checkout form fields.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::ValidationError("name is required".into()));
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') || email.starts_with('@') || email.ends_with('@')
        {
            return Err(CommerceError::ValidationError(format!(
                "invalid email: {email:?}"
            )));
        }
        if self.address.trim().is_empty() {
            return Err(CommerceError::ValidationError("address is required".into()));
        }
        Ok(())
    }
}

/// Chosen payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
    NetBanking,
    Wallet,
    Cod,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::NetBanking => "netbanking",
            PaymentMethod::Wallet => "wallet",
            PaymentMethod::Cod => "cod",
        }
    }

    /// Uppercase label shown on the payment page.
    pub fn display_label(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Parse a method string.
    pub fn from_str(s: &str) -> Result<Self, CommerceError> {
        match s.to_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "upi" => Ok(PaymentMethod::Upi),
            "netbanking" => Ok(PaymentMethod::NetBanking),
            "wallet" => Ok(PaymentMethod::Wallet),
            "cod" => Ok(PaymentMethod::Cod),
            other => Err(CommerceError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

/// A frozen order awaiting payment and confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Unix timestamp of creation.
    #[serde(rename = "date")]
    pub placed_at: i64,
    /// Buyer form fields.
    #[serde(flatten)]
    pub buyer: BuyerDetails,
    /// Snapshot copy of cart lines at checkout time.
    pub items: Vec<CartLine>,
    /// Total value, frozen at creation.
    pub total: Money,
    /// Chosen payment method, unset until selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
}

impl Order {
    /// Build an order from a cart snapshot and validated buyer fields.
    ///
    /// Rejects an empty snapshot; items and total are frozen copies,
    /// not live references into the cart.
    pub fn from_snapshot(
        snapshot: CartSnapshot,
        buyer: BuyerDetails,
    ) -> Result<Self, CommerceError> {
        if snapshot.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        buyer.validate()?;
        Ok(Self {
            id: OrderId::generate(),
            placed_at: current_timestamp(),
            buyer,
            total: snapshot.total_value,
            items: snapshot.lines,
            method: None,
        })
    }

    /// Total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.qty).sum()
    }

    /// Set the payment method.
    pub fn set_method(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    /// First line item, for the payment page thumbnail.
    pub fn first_item(&self) -> Option<&CartLine> {
        self.items.first()
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
