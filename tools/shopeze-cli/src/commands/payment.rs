//! Payment commands: method selection, then payment through settle and
//! confirmation.

use anyhow::Result;
use shopeze_analytics::LinkType;
use shopeze_commerce::ids::OrderId;
use shopeze_commerce::order::PaymentMethod;
use shopeze_commerce::page::Page;
use shopeze_funnel::{Confirmation, SETTLE_DELAY};

use super::{ConfirmArgs, PayArgs};
use crate::context::Context;
use crate::output;

/// Run the pay command: record the chosen method, land on the payment
/// page.
pub async fn pay(args: PayArgs, ctx: &Context) -> Result<()> {
    let method = PaymentMethod::from_str(&args.method).map_err(|e| ctx.redirect(e.into()))?;
    ctx.funnel
        .emitter()
        .link_clicked(Page::PaymentMethod, method.as_str(), LinkType::Button, "pay-options");

    let order = ctx.funnel.select_method(method).map_err(|e| ctx.redirect(e))?;
    ctx.funnel
        .visit_page(Page::Payment)
        .map_err(|e| ctx.redirect(e))?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }
    ctx.output.header("Payment");
    ctx.output.kv("order", order.id.as_str());
    if let Some(first) = order.first_item() {
        ctx.output.kv("item", first.id.as_str());
    }
    ctx.output.kv("amount", &output::price(&order.total));
    ctx.output.kv("method", &method.display_label());
    ctx.output.info(&format!(
        "Confirm with `shopeze confirm {}`.",
        order.id.as_str()
    ));
    Ok(())
}

/// Run the confirm command: Payment -> Processing -> Confirmation.
pub async fn confirm(args: ConfirmArgs, ctx: &Context) -> Result<()> {
    let id = OrderId::new(&args.order_id);
    ctx.funnel
        .emitter()
        .link_clicked(Page::Payment, "Confirm & Pay", LinkType::Button, "pay-panel");
    ctx.funnel.confirm_payment(&id).map_err(|e| ctx.redirect(e))?;

    ctx.funnel
        .visit_page(Page::Processing)
        .map_err(|e| ctx.redirect(e))?;
    ctx.output.info(&format!(
        "Processing payment ({} ms)...",
        SETTLE_DELAY.as_millis()
    ));
    let order = ctx.funnel.process(&id).await.map_err(|e| ctx.redirect(e))?;

    ctx.funnel
        .visit_page(Page::Confirmation)
        .map_err(|e| ctx.redirect(e))?;
    match ctx.funnel.view_confirmation(&order.id) {
        Confirmation::Full(order) => {
            if ctx.output.is_json() {
                ctx.output.json(&order);
                return Ok(());
            }
            ctx.output.header("Thank you for your order!");
            ctx.output.kv("purchase id", order.id.as_str());
            ctx.output.kv("total", &output::price(&order.total));
            for line in &order.items {
                ctx.output.list_item(&format!(
                    "{} (ID: {}) - {} × {}",
                    line.title,
                    line.id,
                    line.price.display(),
                    line.qty
                ));
            }
            ctx.output.kv("email", &order.buyer.email);
            ctx.output
                .info("A confirmation has been sent to your email.");
        }
        Confirmation::BareId(id) => {
            // Revisit: the slot is spent, only the id can be shown.
            ctx.output.header("Thank you for your order!");
            ctx.output.kv("purchase id", id.as_str());
        }
    }
    Ok(())
}
