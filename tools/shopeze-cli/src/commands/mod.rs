//! CLI command implementations.
//!
//! One subcommand per page or interaction of the storefront. Every
//! command fires `pageLoaded` for its page before any stage logic runs.

pub mod browse;
pub mod cart;
pub mod checkout;
pub mod clicks;
pub mod payment;
pub mod session;

use clap::Args;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id (e.g., p-101).
    pub id: String,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product id (e.g., p-101).
    pub id: String,

    /// Quantity to add (clamped to at least 1).
    #[arg(short, long, default_value = "1")]
    pub qty: i64,
}

/// Arguments for the qty command.
#[derive(Args)]
pub struct QtyArgs {
    /// Product id.
    pub id: String,

    /// Signed quantity delta; the resulting quantity floors at 1.
    #[arg(allow_hyphen_values = true)]
    pub delta: i64,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Buyer name.
    #[arg(long)]
    pub name: String,

    /// Buyer email.
    #[arg(long)]
    pub email: String,

    /// Delivery address.
    #[arg(long)]
    pub address: String,
}

/// Arguments for the pay command.
#[derive(Args)]
pub struct PayArgs {
    /// Payment method: card, upi, netbanking, wallet, or cod.
    pub method: String,
}

/// Arguments for the confirm command.
#[derive(Args)]
pub struct ConfirmArgs {
    /// The order id handed out at checkout.
    pub order_id: String,
}
