//! Session commands.

use anyhow::Result;

use crate::context::Context;

/// Run the reset-session command: drop the pending order slot, the
/// CLI's equivalent of closing the tab. The cart and click log are
/// durable and survive.
pub async fn reset(ctx: &Context) -> Result<()> {
    ctx.funnel.orders().clear().map_err(|e| ctx.redirect(e))?;
    ctx.output.success("Session cleared");
    Ok(())
}
