//! Read-only cart commands.

use anyhow::Result;
use foodcart_cache::Cache;
use foodcart_core::cart::CartLine;
use foodcart_core::Price;
use serde::Serialize;

use crate::context::Context;
use crate::output::truncate;

/// Cart summary for JSON output.
#[derive(Debug, Serialize)]
struct Summary {
    total_items: u64,
    subtotal: Price,
}

/// A cart found in the data directory.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct StoredCart {
    key: String,
    /// `None` when the payload does not parse as a cart.
    total_items: Option<u64>,
    active: bool,
}

/// Run the list command.
pub fn list(ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "lines": cart.lines(),
            "total_items": cart.total_items(),
            "subtotal": cart.subtotal(),
        }));
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        ctx.output.info("Run `foodcart add` to add a dish.");
        return Ok(());
    }

    ctx.output.header("Cart");
    let widths = [12, 24, 5, 14, 14];
    ctx.output
        .table_row(&["ID", "NAME", "QTY", "PRICE", "TOTAL"], &widths);

    for line in cart.lines() {
        let name = truncate(&line.name, 24);
        let quantity = line.quantity.to_string();
        let price = ctx.price(line.price);
        let total = ctx.price(line.line_total());
        ctx.output.table_row(
            &[
                line.id.as_str(),
                name.as_str(),
                quantity.as_str(),
                price.as_str(),
                total.as_str(),
            ],
            &widths,
        );
        if line.has_note() {
            ctx.output.kv("note", &line.note);
        }
    }

    ctx.output.info("");
    ctx.output.kv("Items", &cart.total_items().to_string());
    ctx.output.kv("Subtotal", &ctx.price(cart.subtotal()));
    Ok(())
}

/// Run the total command.
pub fn total(ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;
    let summary = Summary {
        total_items: cart.total_items(),
        subtotal: cart.subtotal(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.kv("Items", &summary.total_items.to_string());
    ctx.output.kv("Subtotal", &ctx.price(summary.subtotal));
    Ok(())
}

/// Run the carts command.
pub fn carts(ctx: &Context) -> Result<()> {
    let cache = ctx.open_cache()?;
    let carts = stored_carts(&cache, &ctx.config.cart.storage_key)?;

    if ctx.output.is_json() {
        ctx.output.json(&carts);
        return Ok(());
    }

    if carts.is_empty() {
        ctx.output
            .info(&format!("No carts stored in {}", ctx.data_dir.display()));
        return Ok(());
    }

    ctx.output.header("Stored carts");
    let widths = [2, 32, 12];
    ctx.output.table_row(&["", "KEY", "ITEMS"], &widths);
    for cart in &carts {
        let items = cart
            .total_items
            .map_or_else(|| "unreadable".to_string(), |n| n.to_string());
        let marker = if cart.active { "*" } else { "" };
        ctx.output
            .table_row(&[marker, cart.key.as_str(), items.as_str()], &widths);
    }
    Ok(())
}

fn stored_carts(cache: &Cache, active_key: &str) -> Result<Vec<StoredCart>> {
    let carts = cache
        .keys()?
        .into_iter()
        .map(|key| {
            let total_items = cache
                .get::<Vec<CartLine>>(&key)
                .ok()
                .flatten()
                .map(|lines| lines.iter().map(|l| u64::from(l.quantity)).sum());
            StoredCart {
                active: key == active_key,
                key,
                total_items,
            }
        })
        .collect();
    Ok(carts)
}
