//! Builder for creating and configuring Inventory instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Inventory;
use crate::{
    context::AppContext,
    error::{InventoryError, Result},
    handle::ItemDatabase,
    provider::get_database,
};

/// Builder for creating and configuring Inventory instances.
#[derive(Debug, Clone, Default)]
pub struct InventoryBuilder {
    data_dir: Option<PathBuf>,
    database: Option<&'static ItemDatabase>,
}

impl InventoryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom data directory for the database file.
    ///
    /// If not specified, [`AppContext::from_env`] decides:
    /// `$INVENTORY_DATA_DIR`, then `$XDG_DATA_HOME/inventory`.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Binds the inventory to an explicit handle instead of the process-wide
    /// one. Takes precedence over [`InventoryBuilder::with_data_dir`].
    pub fn with_database(mut self, database: &'static ItemDatabase) -> Self {
        self.database = Some(database);
        self
    }

    /// Builds the configured inventory.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::FileSystem` if the data directory cannot be
    /// created and `InventoryError::StorageOpen` if the database cannot be
    /// opened.
    pub async fn build(self) -> Result<Inventory> {
        if let Some(database) = self.database {
            return Ok(Inventory::new(database));
        }

        let context = match self.data_dir {
            Some(dir) => AppContext::new(dir),
            None => AppContext::from_env()?,
        };

        let database = task::spawn_blocking(move || get_database(&context))
            .await
            .map_err(|e| InventoryError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Inventory::new(database))
    }
}
