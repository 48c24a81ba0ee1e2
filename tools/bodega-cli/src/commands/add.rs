//! `bodega add` - put a product in the cart.

use anyhow::Result;
use bodega_cart::{Price, Product};
use clap::Args;

use crate::context::Context;

/// Arguments for `bodega add`.
#[derive(Args)]
pub struct AddArgs {
    /// Product name; also its identity in the cart
    pub name: String,

    /// Unit price, in currency units
    #[arg(long)]
    pub price: f64,

    /// Image reference shown on the cart page
    #[arg(long, default_value = "")]
    pub image: String,

    /// Quantity to add (a product not yet in the cart always enters at 1)
    #[arg(long, default_value_t = 1)]
    pub qty: u32,
}

pub fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.cart_store()?;
    let product = Product::new(args.name, Price::from_decimal(args.price), args.image);
    store.add_item(&product, args.qty)?;
    Ok(())
}
