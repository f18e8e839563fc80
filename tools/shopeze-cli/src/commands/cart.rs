//! Cart commands: view, add, qty, remove, clear.

use anyhow::Result;
use shopeze_analytics::LinkType;
use shopeze_commerce::ids::ProductId;
use shopeze_commerce::page::Page;

use super::{AddArgs, QtyArgs, RemoveArgs};
use crate::context::Context;
use crate::output;

/// Run the cart command.
pub async fn view(ctx: &Context) -> Result<()> {
    ctx.funnel.visit_page(Page::Cart).map_err(|e| ctx.redirect(e))?;
    let snapshot = ctx.funnel.cart().snapshot().map_err(|e| ctx.redirect(e))?;

    if ctx.output.is_json() {
        ctx.output.json(&snapshot);
        return Ok(());
    }
    ctx.output.header("Your Cart");
    if snapshot.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }
    for line in &snapshot.lines {
        ctx.output.table_row(
            &[
                line.id.as_str(),
                &line.title,
                &format!("× {}", line.qty),
                &output::price(&line.line_total().map_err(|e| ctx.redirect(e.into()))?),
            ],
            &[8, 28, 6, 12],
        );
    }
    ctx.output.kv("items", &snapshot.total_quantity.to_string());
    ctx.output.kv("total", &output::price(&snapshot.total_value));
    Ok(())
}

/// Run the add command.
pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    ctx.funnel
        .visit_page(Page::ProductList)
        .map_err(|e| ctx.redirect(e))?;
    ctx.funnel
        .emitter()
        .link_clicked(Page::ProductList, "Add to Cart", LinkType::Button, "product-grid");

    let id = ProductId::new(&args.id);
    let known = ctx.funnel.catalog().contains(&id);
    ctx.funnel
        .cart()
        .add_or_increment(&id, args.qty)
        .map_err(|e| ctx.redirect(e))?;

    if known {
        ctx.output.success("Added to cart");
        ctx.output
            .kv("items in cart", &ctx.funnel.cart().total_quantity().to_string());
    } else {
        // Stale reference: nothing happened, nothing tracked.
        ctx.output.debug(&format!("unknown product {}, ignored", args.id));
    }
    Ok(())
}

/// Run the qty command.
pub async fn qty(args: QtyArgs, ctx: &Context) -> Result<()> {
    ctx.funnel.visit_page(Page::Cart).map_err(|e| ctx.redirect(e))?;
    ctx.funnel
        .emitter()
        .link_clicked(Page::Cart, "Update Quantity", LinkType::Button, "cart-row");

    let id = ProductId::new(&args.id);
    let changed = ctx
        .funnel
        .cart()
        .change_quantity(&id, args.delta)
        .map_err(|e| ctx.redirect(e))?;
    if !changed {
        ctx.output.warn(&format!("Not in cart: {}", args.id));
        return Ok(());
    }
    let line_qty = ctx
        .funnel
        .cart()
        .load()
        .get(&id)
        .map(|l| l.qty)
        .unwrap_or_default();
    ctx.output
        .success(&format!("{} now × {}", args.id, line_qty));
    Ok(())
}

/// Run the remove command.
pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    ctx.funnel.visit_page(Page::Cart).map_err(|e| ctx.redirect(e))?;
    ctx.funnel
        .emitter()
        .link_clicked(Page::Cart, "Remove", LinkType::Button, "cart-row");

    let id = ProductId::new(&args.id);
    match ctx.funnel.cart().remove(&id).map_err(|e| ctx.redirect(e))? {
        Some(line) => ctx
            .output
            .success(&format!("Removed {} (was × {})", line.title, line.qty)),
        None => ctx.output.warn(&format!("Not in cart: {}", args.id)),
    }
    Ok(())
}

/// Run the clear command.
pub async fn clear(ctx: &Context) -> Result<()> {
    ctx.funnel.visit_page(Page::Cart).map_err(|e| ctx.redirect(e))?;
    ctx.funnel
        .emitter()
        .link_clicked(Page::Cart, "Clear Cart", LinkType::Button, "cart-summary");
    ctx.funnel.cart().clear().map_err(|e| ctx.redirect(e))?;
    ctx.output.success("Cart cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Output;
    use std::path::PathBuf;

    fn open_ctx(name: &str) -> (Context, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "shopeze-cli-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        let ctx = Context::open(dir.clone(), Output::new(false, true)).unwrap();
        (ctx, dir)
    }

    #[tokio::test]
    async fn test_every_cart_action_lands_in_click_log() {
        let (ctx, dir) = open_ctx("cart-clicks");

        add(
            AddArgs {
                id: "p-101".into(),
                qty: 2,
            },
            &ctx,
        )
        .await
        .unwrap();
        qty(
            QtyArgs {
                id: "p-101".into(),
                delta: -1,
            },
            &ctx,
        )
        .await
        .unwrap();
        remove(RemoveArgs { id: "p-101".into() }, &ctx).await.unwrap();
        clear(&ctx).await.unwrap();

        let entries = ctx.funnel.emitter().click_log().entries();
        let names: Vec<&str> = entries.iter().map(|r| r.link_name.as_str()).collect();
        assert_eq!(
            names,
            ["Add to Cart", "Update Quantity", "Remove", "Clear Cart"]
        );
        assert!(entries.iter().all(|r| r.event == "linkClicked"));

        let _ = std::fs::remove_dir_all(dir);
    }
}
