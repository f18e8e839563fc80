//! The checkout command: proceed from cart, submit buyer details.

use anyhow::Result;
use shopeze_analytics::LinkType;
use shopeze_commerce::order::{BuyerDetails, PaymentMethod};
use shopeze_commerce::page::Page;

use super::CheckoutArgs;
use crate::context::Context;
use crate::output;

/// Run the checkout command.
///
/// Models the proceed-to-checkout click plus the details form in one
/// invocation: `beginCheckout` fires from the cart page, then the
/// checkout page loads and the submitted form freezes the order.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    ctx.funnel
        .emitter()
        .link_clicked(Page::Cart, "Proceed to Checkout", LinkType::Cta, "cart-summary");
    ctx.funnel.begin_checkout().map_err(|e| ctx.redirect(e))?;
    ctx.funnel
        .visit_page(Page::Checkout)
        .map_err(|e| ctx.redirect(e))?;

    let buyer = BuyerDetails::new(args.name, args.email, args.address);
    let order = ctx
        .funnel
        .submit_details(buyer)
        .map_err(|e| ctx.redirect(e))?;

    ctx.funnel
        .visit_page(Page::PaymentMethod)
        .map_err(|e| ctx.redirect(e))?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }
    ctx.output.header("Choose a payment method");
    ctx.output.kv("order", order.id.as_str());
    ctx.output.kv("items", &order.item_count().to_string());
    ctx.output.kv("total", &output::price(&order.total));
    for method in [
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::NetBanking,
        PaymentMethod::Wallet,
        PaymentMethod::Cod,
    ] {
        ctx.output.list_item(&method.display_label());
    }
    ctx.output
        .info("Continue with `shopeze pay <method>`.");
    Ok(())
}
