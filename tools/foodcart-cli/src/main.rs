//! Foodcart CLI - manage the local shopping cart from a terminal.
//!
//! Commands:
//! - `foodcart add` - Add a dish to the cart
//! - `foodcart set-qty` - Set a line's quantity (0 removes it)
//! - `foodcart remove` - Remove a line
//! - `foodcart note` - Set a line's note
//! - `foodcart clear` - Empty the cart
//! - `foodcart list` - Show the cart
//! - `foodcart total` - Show item count and subtotal
//! - `foodcart carts` - List carts stored in the data directory
//! - `foodcart config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, ClearArgs, ConfigArgs, NoteArgs, RemoveArgs, SetQtyArgs};

/// Foodcart CLI - Manage the local shopping cart
#[derive(Parser)]
#[command(name = "foodcart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory holding the cart store (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a dish to the cart
    Add(AddArgs),

    /// Set the quantity of a line (0 removes it)
    SetQty(SetQtyArgs),

    /// Remove a line from the cart
    Remove(RemoveArgs),

    /// Set the note on a line
    Note(NoteArgs),

    /// Remove every line from the cart
    Clear(ClearArgs),

    /// Show the cart contents
    List,

    /// Show item count and subtotal
    Total,

    /// List carts stored in the data directory
    Carts,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.data_dir.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Add(args) => commands::items::add(args, &ctx),
        Commands::SetQty(args) => commands::items::set_quantity(args, &ctx),
        Commands::Remove(args) => commands::items::remove(args, &ctx),
        Commands::Note(args) => commands::items::note(args, &ctx),
        Commands::Clear(args) => commands::items::clear(args, &ctx),
        Commands::List => commands::show::list(&ctx),
        Commands::Total => commands::show::total(&ctx),
        Commands::Carts => commands::show::carts(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
