//! Browse commands: home, product list, product detail.

use anyhow::Result;
use shopeze_analytics::LinkType;
use shopeze_commerce::ids::ProductId;
use shopeze_commerce::page::Page;

use super::ShowArgs;
use crate::context::Context;
use crate::output;

/// Run the home command.
pub async fn home(ctx: &Context) -> Result<()> {
    ctx.funnel.visit_page(Page::Home).map_err(|e| ctx.redirect(e))?;
    ctx.funnel
        .emitter()
        .link_clicked(Page::Home, "Shop Now", LinkType::Cta, "hero-section");

    ctx.output.header("Shopeze");
    ctx.output.info("Everything you need, delivered.");
    ctx.output
        .kv("items in cart", &ctx.funnel.cart().total_quantity().to_string());
    ctx.output
        .info("Browse the catalog with `shopeze products`.");
    Ok(())
}

/// Run the products command.
pub async fn products(ctx: &Context) -> Result<()> {
    ctx.funnel
        .visit_page(Page::ProductList)
        .map_err(|e| ctx.redirect(e))?;

    ctx.output.header("Products");
    if ctx.output.is_json() {
        let listing: Vec<_> = ctx.funnel.catalog().iter().collect();
        ctx.output.json(&listing);
        return Ok(());
    }
    for product in ctx.funnel.catalog().iter() {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.title,
                &output::price(&product.price),
            ],
            &[8, 28, 12],
        );
    }
    Ok(())
}

/// Run the show command.
pub async fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(&args.id);
    let Some(product) = ctx.funnel.view_product(&id) else {
        ctx.output.warn(&format!("Product not found: {}", args.id));
        return Ok(());
    };
    let product = product.clone();
    ctx.funnel
        .emitter()
        .link_clicked(Page::ProductList, &product.title, LinkType::Card, "product-grid");

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }
    ctx.output.header(&product.title);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("sku", &product.sku);
    ctx.output.kv("price", &output::price(&product.price));
    ctx.output.kv("about", &product.description);
    Ok(())
}
