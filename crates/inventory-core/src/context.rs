//! Host environment boundary: where the database file lives.

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::error::{InventoryError, Result};

/// File name of the item database inside the data directory.
pub const DATABASE_NAME: &str = "item_database";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "INVENTORY_DATA_DIR";

/// Application context used to locate the database file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    data_dir: PathBuf,
}

impl AppContext {
    /// Creates a context rooted at an explicit data directory.
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolves the data directory from the environment.
    ///
    /// Uses `$INVENTORY_DATA_DIR` when set and non-empty, otherwise the XDG
    /// data directory: `$XDG_DATA_HOME/inventory` or
    /// `~/.local/share/inventory`.
    pub fn from_env() -> Result<Self> {
        match env::var_os(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
            Some(dir) => Ok(Self::new(dir)),
            None => Self::from_xdg(),
        }
    }

    fn from_xdg() -> Result<Self> {
        let database_path = xdg::BaseDirectories::with_prefix("inventory")
            .place_data_file(DATABASE_NAME)
            .map_err(|e| InventoryError::XdgDirectory(e.to_string()))?;

        database_path
            .parent()
            .map(Self::new)
            .ok_or_else(|| InventoryError::XdgDirectory("data file has no parent directory".into()))
    }

    /// Directory holding the database file.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_NAME)
    }

    /// Creates the data directory if it does not exist yet.
    pub(crate) fn ensure_data_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| InventoryError::FileSystem {
            path: self.data_dir.clone(),
            source: e,
        })
    }
}
