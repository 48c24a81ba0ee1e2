//! `bodega clear` - empty the cart.

use anyhow::Result;
use clap::Args;

use crate::context::Context;

/// Arguments for `bodega clear`.
#[derive(Args)]
pub struct ClearArgs {}

pub fn run(_args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.cart_store()?;
    store.clear()?;
    ctx.output.success("Cart cleared.");
    Ok(())
}
