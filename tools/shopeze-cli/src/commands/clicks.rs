//! Click log commands.

use anyhow::Result;

use crate::context::Context;

/// Run the clicks command: dump the stored click log.
pub async fn show(ctx: &Context) -> Result<()> {
    let entries = ctx.funnel.emitter().click_log().entries();
    if ctx.output.is_json() {
        ctx.output.json(&entries);
        return Ok(());
    }
    ctx.output.header("Click log");
    if entries.is_empty() {
        ctx.output.info("No clicks recorded.");
        return Ok(());
    }
    for entry in &entries {
        ctx.output.table_row(
            &[
                &entry.timestamp.to_string(),
                &entry.link_name,
                &entry.link_type,
                &entry.link_position,
            ],
            &[12, 24, 8, 16],
        );
    }
    Ok(())
}

/// Run the clear-clicks command.
pub async fn clear(ctx: &Context) -> Result<()> {
    ctx.funnel.emitter().click_log().clear();
    ctx.output.success("Click log cleared");
    Ok(())
}
