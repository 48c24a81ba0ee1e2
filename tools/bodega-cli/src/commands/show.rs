//! `bodega show` - render the cart contents.

use anyhow::Result;
use bodega_cart::Cart;
use clap::Args;

use crate::context::Context;
use crate::output::Output;

/// Arguments for `bodega show`.
#[derive(Args)]
pub struct ShowArgs {}

pub fn run(_args: ShowArgs, ctx: &Context) -> Result<()> {
    let store = ctx.cart_store()?;
    let cart = store.load();

    if ctx.output.is_json() {
        ctx.output.json(&cart);
        return Ok(());
    }

    render(&ctx.output, &cart);
    ctx.output
        .dim(&format!("{} item(s) in cart", cart.total_quantity()));
    Ok(())
}

/// The cart page: one row per item with its index, then the total.
///
/// Indices printed here are positions in the cart right now; any mutation
/// shifts them.
pub fn render(output: &Output, cart: &Cart) {
    if cart.is_empty() {
        output.info("Your cart is empty.");
        return;
    }

    output.header("Your cart");
    for (index, item) in cart.items().iter().enumerate() {
        output.line(&format!(
            "[{index}] {}  ₱{} × {} = ₱{}",
            item.name,
            item.price,
            item.quantity,
            item.line_total()
        ));
    }
    output.line(&format!("Total: ₱{}", cart.total_price()));
}
