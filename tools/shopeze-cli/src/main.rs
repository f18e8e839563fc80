//! Shopeze CLI - a command line rendition of the demo storefront.
//!
//! Commands:
//! - `shopeze home` / `products` / `show <id>` - browse the catalog
//! - `shopeze add` / `cart` / `qty` / `remove` / `clear` - manage the cart
//! - `shopeze checkout` - submit buyer details, freeze the order
//! - `shopeze pay` / `confirm` - pick a method and settle the payment
//! - `shopeze clicks` / `clear-clicks` - inspect the stored click log
//! - `shopeze reset-session` - drop the in-flight order (close the tab)
//!
//! Each invocation is one page view: `pageLoaded` fires before any
//! stage logic, and `--events` dumps the invocation's analytics queue
//! on exit.

mod commands;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shopeze_funnel::FunnelError;

use commands::{AddArgs, CheckoutArgs, ConfirmArgs, PayArgs, QtyArgs, RemoveArgs, ShowArgs};

/// Shopeze - browse, fill a cart, and check out from your terminal
#[derive(Parser)]
#[command(name = "shopeze")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Dump this invocation's analytics queue on exit
    #[arg(long, global = true)]
    events: bool,

    /// Storage root (defaults to ~/.local/share/shopeze)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the storefront home page
    Home,

    /// List the product catalog
    Products,

    /// Show a product's details
    Show(ShowArgs),

    /// Add a product to the cart
    Add(AddArgs),

    /// Show the cart
    Cart,

    /// Adjust a cart line's quantity by a signed delta
    Qty(QtyArgs),

    /// Remove a product from the cart
    Remove(RemoveArgs),

    /// Empty the cart
    Clear,

    /// Proceed to checkout and submit buyer details
    Checkout(CheckoutArgs),

    /// Choose a payment method for the pending order
    Pay(PayArgs),

    /// Confirm payment and wait for it to settle
    Confirm(ConfirmArgs),

    /// Show the stored click log
    Clicks,

    /// Clear the stored click log
    ClearClicks,

    /// Drop the in-flight order, as if the tab were closed
    ResetSession,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins; --verbose raises the default floor to debug.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"))
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = output::Output::new(cli.verbose, cli.json);
    let state_dir = cli.state_dir.unwrap_or_else(context::default_state_dir);
    let ctx = context::Context::open(state_dir, output)?;

    let result = match cli.command {
        Commands::Home => commands::browse::home(&ctx).await,
        Commands::Products => commands::browse::products(&ctx).await,
        Commands::Show(args) => commands::browse::show(args, &ctx).await,
        Commands::Add(args) => commands::cart::add(args, &ctx).await,
        Commands::Cart => commands::cart::view(&ctx).await,
        Commands::Qty(args) => commands::cart::qty(args, &ctx).await,
        Commands::Remove(args) => commands::cart::remove(args, &ctx).await,
        Commands::Clear => commands::cart::clear(&ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Pay(args) => commands::payment::pay(args, &ctx).await,
        Commands::Confirm(args) => commands::payment::confirm(args, &ctx).await,
        Commands::Clicks => commands::clicks::show(&ctx).await,
        Commands::ClearClicks => commands::clicks::clear(&ctx).await,
        Commands::ResetSession => commands::session::reset(&ctx).await,
    };

    if cli.events {
        ctx.output.json(&ctx.funnel.emitter().queue().events());
    }

    if let Err(e) = result {
        // Funnel precondition failures alert and point back to a stage.
        match e.downcast_ref::<FunnelError>() {
            Some(funnel_err) => {
                ctx.output.alert(&funnel_err.alert_text());
                ctx.output
                    .info(&format!("Continue at {}", funnel_err.redirect().url()));
            }
            None => ctx.output.error(&format!("{:#}", e)),
        }
        std::process::exit(1);
    }

    Ok(())
}
