//! `bodega inc` - increase the quantity of a cart item.

use anyhow::Result;
use bodega_cart::CartUpdate;
use clap::Args;

use crate::commands::show;
use crate::context::Context;

/// Arguments for `bodega inc`.
#[derive(Args)]
pub struct IncArgs {
    /// Item index as shown by `bodega show`; indices shift after every mutation
    pub index: usize,
}

pub fn run(args: IncArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.cart_store()?;
    match store.increase_quantity(args.index)? {
        CartUpdate::Applied(cart) => show::render(&ctx.output, &cart),
        CartUpdate::Rejected(_) => {}
        CartUpdate::Skipped(_) => {
            ctx.output.warn(&format!("No item at index {}.", args.index));
        }
    }
    Ok(())
}
