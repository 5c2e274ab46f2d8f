//! CLI command implementations.

pub mod config;
pub mod items;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product record (catalog API JSON) to add instead of --id/--name/--price.
    #[arg(long, conflicts_with_all = ["id", "name", "price"])]
    pub product: Option<String>,

    /// Product ID.
    #[arg(long, required_unless_present = "product")]
    pub id: Option<String>,

    /// Display name.
    #[arg(long, required_unless_present = "product")]
    pub name: Option<String>,

    /// Unit price in whole currency units.
    #[arg(long, required_unless_present = "product")]
    pub price: Option<i64>,

    /// Quantity to add.
    #[arg(short, long, default_value = "1")]
    pub quantity: u32,

    /// Note for the kitchen.
    #[arg(short, long, default_value = "")]
    pub note: String,

    /// Image reference.
    #[arg(long)]
    pub image: Option<String>,

    /// Category tag.
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the set-qty command.
#[derive(Args)]
pub struct SetQtyArgs {
    /// Product ID.
    pub id: String,

    /// New quantity (0 removes the line).
    pub quantity: u32,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the note command.
#[derive(Args)]
pub struct NoteArgs {
    /// Product ID.
    pub id: String,

    /// Note text (empty clears it).
    #[arg(default_value = "")]
    pub note: String,
}

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
