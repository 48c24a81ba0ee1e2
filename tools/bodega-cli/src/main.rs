//! Bodega CLI - terminal front end for the storefront cart.
//!
//! Commands:
//! - `bodega add` - put a product in the cart
//! - `bodega show` - render the cart and its total
//! - `bodega inc` / `bodega dec` - adjust a line item's quantity
//! - `bodega remove` - delete a line item
//! - `bodega clear` - empty the cart
//! - `bodega checkout` - confirm the order and empty the cart
//! - `bodega contact` - validate and send a contact message

mod commands;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    AddArgs, CheckoutArgs, ClearArgs, ContactArgs, DecArgs, IncArgs, RemoveArgs, ShowArgs,
};

/// Bodega CLI - a storefront cart in your terminal
#[derive(Parser)]
#[command(name = "bodega")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Directory holding the persisted cart (default: user data dir, or $BODEGA_STORE)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Put a product in the cart
    Add(AddArgs),

    /// Render the cart contents and total
    Show(ShowArgs),

    /// Increase the quantity of the item at an index
    Inc(IncArgs),

    /// Decrease the quantity of the item at an index
    Dec(DecArgs),

    /// Remove the item at an index
    Remove(RemoveArgs),

    /// Empty the cart
    Clear(ClearArgs),

    /// Confirm the order and empty the cart
    Checkout(CheckoutArgs),

    /// Validate and send a contact message
    Contact(ContactArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::new(cli.store, output)?;

    let result = match cli.command {
        Commands::Add(args) => commands::add::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Inc(args) => commands::inc::run(args, &ctx),
        Commands::Dec(args) => commands::dec::run(args, &ctx),
        Commands::Remove(args) => commands::remove::run(args, &ctx),
        Commands::Clear(args) => commands::clear::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Contact(args) => commands::contact::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
