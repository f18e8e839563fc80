//! Cart persistence and the checkout funnel for Shopeze.
//!
//! Three pieces make up the storefront core:
//!
//! - [`CartStore`]: write-through cart CRUD over durable storage, with
//!   `addToCart` / `removeFromCart` emission at the mutation points
//! - [`PendingOrderStore`]: the single session-scoped slot holding the
//!   order between checkout submission and confirmation
//! - [`Funnel`]: the stage machine Cart -> Checkout -> PaymentMethod ->
//!   Payment -> Processing -> Confirmation, with precondition checks,
//!   redirect-carrying errors, and the fixed settle delay
//!
//! # Example
//!
//! ```rust
//! use shopeze_analytics::{AnalyticsEmitter, ClickLog, EventQueue};
//! use shopeze_commerce::prelude::*;
//! use shopeze_funnel::Funnel;
//! use shopeze_storage::Store;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), shopeze_funnel::FunnelError> {
//! let emitter = AnalyticsEmitter::new(EventQueue::new(), ClickLog::new(Store::in_memory()));
//! let funnel = Funnel::new(Catalog::demo(), Store::in_memory(), Store::in_memory(), emitter);
//!
//! funnel.cart().add_or_increment(&ProductId::new("p-101"), 2)?;
//! funnel.begin_checkout()?;
//! let order = funnel.submit_details(BuyerDetails::new("Asha", "asha@example.com", "12 Lane"))?;
//! funnel.select_method(PaymentMethod::Card)?;
//! funnel.confirm_payment(&order.id)?;
//! funnel.process(&order.id).await?;
//! # Ok(())
//! # }
//! ```

mod cart_store;
mod error;
mod funnel;
mod pending_order;

pub use cart_store::CartStore;
pub use error::FunnelError;
pub use funnel::{Confirmation, Funnel, SETTLE_DELAY};
pub use pending_order::PendingOrderStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CartStore, Confirmation, Funnel, FunnelError, PendingOrderStore};
}
