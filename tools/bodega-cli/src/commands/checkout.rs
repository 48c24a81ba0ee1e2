//! `bodega checkout` - confirm the order and empty the cart.

use anyhow::Result;
use clap::Args;

use crate::context::Context;

/// Arguments for `bodega checkout`.
#[derive(Args)]
pub struct CheckoutArgs {}

pub fn run(_args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.cart_store()?;
    let summary = store.checkout()?;
    ctx.output.debug(&format!(
        "order of {} unit(s) confirmed",
        summary.total_quantity
    ));
    Ok(())
}
