use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AddItemArgs, ItemIdArgs, UpdateItemArgs};

/// Command-line interface for the inventory tracker
///
/// Keeps a local database of stock items with their price and quantity.
/// Running without a command lists every item.
#[derive(Parser)]
#[command(version, about, name = "inv")]
pub struct Args {
    /// Directory holding the item database. Defaults to $INVENTORY_DATA_DIR,
    /// then $XDG_DATA_HOME/inventory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new item
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// List all items ordered by name
    #[command(alias = "ls")]
    List,
    /// Show one item
    Show(ItemIdArgs),
    /// Change an item's name, price or quantity
    Update(UpdateItemArgs),
    /// Sell one unit of an item
    Sell(ItemIdArgs),
    /// Remove an item
    #[command(alias = "rm")]
    Remove(ItemIdArgs),
}
