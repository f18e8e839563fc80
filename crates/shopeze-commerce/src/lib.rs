//! Storefront domain types for Shopeze.
//!
//! This crate provides the data model for the storefront core:
//!
//! - **Catalog**: static, read-only product records
//! - **Cart**: durable buyer selection with merge-on-add line items
//! - **Order**: a frozen snapshot of cart + buyer details
//! - **Page**: the enumerated stages of the browse/checkout funnel
//!
//! # Example
//!
//! ```rust
//! use shopeze_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let product = catalog.get(&ProductId::new("p-101")).unwrap();
//!
//! let mut cart = Cart::default();
//! cart.add_or_increment(product, 2);
//!
//! let snapshot = cart.snapshot().unwrap();
//! assert_eq!(snapshot.total_value, Money::inr(598));
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod order;
pub mod page;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::{Currency, Money};

    pub use crate::catalog::{Catalog, Product};

    pub use crate::cart::{Cart, CartLine, CartSnapshot};

    pub use crate::order::{BuyerDetails, Order, PaymentMethod};

    pub use crate::page::Page;
}
