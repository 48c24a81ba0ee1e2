//! `bodega contact` - validate and send a contact message.

use anyhow::Result;
use bodega_contact::ContactForm;
use clap::Args;

use crate::context::Context;

/// Arguments for `bodega contact`.
#[derive(Args)]
pub struct ContactArgs {
    /// Sender name
    #[arg(long)]
    pub name: String,

    /// Reply email address
    #[arg(long)]
    pub email: String,

    /// Message body
    #[arg(long)]
    pub message: String,
}

pub fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let form = ContactForm::new(&args.name, &args.email, &args.message);
    form.validate()?;
    ctx.output.success("Thank you for your message!");
    Ok(())
}
