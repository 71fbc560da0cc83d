//! The shared database handle.

use std::{
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};

use log::debug;

use crate::{
    context::AppContext,
    dao::ItemDao,
    db::{Database, MigrationOutcome},
    error::Result,
};

/// An open item database, shareable across threads.
///
/// The connection sits behind a mutex; every data-access call holds it for
/// the duration of one statement or transaction. Obtain the process-wide
/// instance through [`crate::get_database`].
pub struct ItemDatabase {
    path: PathBuf,
    migration: MigrationOutcome,
    database: Mutex<Database>,
}

impl ItemDatabase {
    /// Opens the database named by the context, creating the data directory
    /// and the file as needed.
    pub fn open(context: &AppContext) -> Result<Self> {
        context.ensure_data_dir()?;

        let path = context.database_path();
        let database = Database::new(&path)?;
        debug!(
            "Item database ready at {} ({:?})",
            path.display(),
            database.migration_outcome()
        );

        Ok(Self::from_database(path, database))
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_database(
            PathBuf::from(":memory:"),
            Database::open_in_memory()?,
        ))
    }

    fn from_database(path: PathBuf, database: Database) -> Self {
        Self {
            path,
            migration: database.migration_outcome(),
            database: Mutex::new(database),
        }
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What schema initialization did when the handle was opened. A
    /// [`MigrationOutcome::Recreated`] value means previously stored items
    /// were discarded.
    pub fn migration_outcome(&self) -> MigrationOutcome {
        self.migration
    }

    /// Data-access object for items.
    pub fn item_dao(&self) -> ItemDao<'_> {
        ItemDao::new(self)
    }

    /// Locks the connection.
    ///
    /// A panic while the lock was held leaves at most an uncommitted
    /// transaction, which SQLite rolls back, so a poisoned lock is reused.
    pub(crate) fn lock(&self) -> MutexGuard<'_, Database> {
        self.database.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ItemDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemDatabase")
            .field("path", &self.path)
            .field("migration", &self.migration)
            .finish_non_exhaustive()
    }
}
