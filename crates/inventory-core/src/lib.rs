//! Core library for the inventory tracker.
//!
//! This crate stores inventory items in a local SQLite database and hands out
//! a single, lazily opened database handle per process.
//!
//! # Layers
//!
//! - [`models`]: the [`Item`] record and its field-to-column mapping
//! - [`display`]: markdown output and locale-aware price formatting
//! - [`db`]: the SQLite connection, schema setup, the destructive migration
//!   policy, and item queries
//! - [`provider`]: the process-wide [`ItemDatabase`] handle behind
//!   [`get_database`]
//! - [`dao`]: item operations on a shared handle
//! - [`inventory`]: async API with stock operations, used by the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use inventory_core::{display::format_price_with, CurrencyFormat, Item, ItemDatabase};
//!
//! # fn main() -> inventory_core::Result<()> {
//! let database = ItemDatabase::open_in_memory()?;
//! let dao = database.item_dao();
//!
//! let item = dao.insert(&Item::new("Widget", 19.99, 4))?;
//! assert!(item.id > 0);
//! assert_eq!(format_price_with(&item, &CurrencyFormat::EN_US), "$19.99");
//!
//! dao.update(&item.clone().with_quantity(3))?;
//! assert_eq!(dao.get_item(item.id)?.unwrap().quantity_in_stock, 3);
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod dao;
pub mod db;
pub mod display;
pub mod error;
pub mod handle;
pub mod inventory;
pub mod models;
pub mod params;
pub mod provider;

// Re-export commonly used types
pub use context::{AppContext, DATABASE_NAME, DATA_DIR_ENV};
pub use dao::ItemDao;
pub use db::{Database, MigrationOutcome, MigrationPolicy, OnConflict, SCHEMA_VERSION};
pub use display::{format_price, CreateResult, CurrencyFormat, DeleteResult, Items, UpdateResult};
pub use error::{InventoryError, Result};
pub use handle::ItemDatabase;
pub use inventory::{Inventory, InventoryBuilder};
pub use models::{Item, ItemColumn};
pub use params::{Id, NewItem, UpdateItem};
pub use provider::{get_database, DatabaseProvider};
