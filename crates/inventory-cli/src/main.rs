//! Inventory CLI Application
//!
//! Command-line interface for the inventory tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use inventory_core::{InventoryBuilder, MigrationOutcome};
use log::{info, warn};
use renderer::{OutputMode, TerminalRenderer};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        no_color,
        json,
        command,
    } = Args::parse();

    let inventory = InventoryBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .await
        .context("Failed to open item database")?;

    let database = inventory.database();
    info!("Inventory started with database {}", database.path().display());
    if let MigrationOutcome::Recreated {
        from_version,
        dropped_rows,
    } = database.migration_outcome()
    {
        warn!("Database schema {from_version} was replaced; {dropped_rows} item(s) were discarded");
    }

    let mode = match (json, no_color) {
        (true, _) => OutputMode::Json,
        (false, true) => OutputMode::Plain,
        (false, false) => OutputMode::Rich,
    };
    let cli = Cli::new(inventory, TerminalRenderer::new(mode));

    match command {
        Some(command) => cli.handle_command(command).await,
        None => cli.list_items().await,
    }
}
