//! High-level async API for managing inventory items.
//!
//! [`Inventory`] sits between the application layers and the shared
//! [`ItemDatabase`] handle. SQLite calls block, so every operation runs on
//! tokio's blocking pool and is awaited from async code.
//!
//! ## Submodules
//!
//! - [`builder`]: creates [`Inventory`] instances bound to the process-wide
//!   handle or to an explicit one
//! - [`item_ops`]: add, show, list, update and remove items
//! - [`stock_ops`]: selling stock and availability checks
//!
//! # Usage
//!
//! ```rust
//! use inventory_core::{params::NewItem, InventoryBuilder, ItemDatabase};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let handle: &'static ItemDatabase = Box::leak(Box::new(ItemDatabase::open_in_memory()?));
//! let inventory = InventoryBuilder::new().with_database(handle).build().await?;
//!
//! let item = inventory
//!     .add_item(&NewItem {
//!         name: "Hammer".to_string(),
//!         price: 12.5,
//!         quantity: 3,
//!     })
//!     .await?;
//! let sold = inventory.sell_item(&item.id.into()).await?;
//! assert_eq!(sold.quantity_in_stock, 2);
//! # Ok(())
//! # }
//! ```

use tokio::task;

pub mod builder;
pub mod item_ops;
pub mod stock_ops;


pub use builder::InventoryBuilder;

use crate::{
    error::{InventoryError, Result},
    handle::ItemDatabase,
};

/// Main interface for managing inventory items.
#[derive(Debug, Clone, Copy)]
pub struct Inventory {
    pub(crate) database: &'static ItemDatabase,
}

impl Inventory {
    pub(crate) fn new(database: &'static ItemDatabase) -> Self {
        Self { database }
    }

    /// The handle this inventory operates on.
    pub fn database(&self) -> &'static ItemDatabase {
        self.database
    }

    /// Runs a blocking database call on the blocking pool.
    pub(crate) async fn run_blocking<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&'static ItemDatabase) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let database = self.database;
        task::spawn_blocking(move || f(database))
            .await
            .map_err(|e| InventoryError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}
