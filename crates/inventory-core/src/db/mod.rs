//! Database operations and SQLite management for items.
//!
//! [`Database`] owns one SQLite connection. Opening it configures the
//! connection and brings the schema to the declared version, applying the
//! destructive migration policy when the stored schema does not match (see
//! [`migrations`]). Item queries live in [`item_queries`].

use std::{path::Path, time::Duration};

use log::debug;
use rusqlite::{ffi, Connection, OpenFlags};

use crate::error::{InventoryError, Result};

pub mod item_queries;
pub mod migrations;

pub use item_queries::OnConflict;
pub use migrations::{MigrationOutcome, MigrationPolicy, SCHEMA_VERSION};

/// How long a statement waits on a lock held by another connection.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
    migration: MigrationOutcome,
}

impl Database {
    /// Opens (creating if needed) the database file at `path` and
    /// initializes the schema.
    ///
    /// A file that cannot be opened, written, or read as a SQLite database
    /// is reported as [`InventoryError::StorageOpen`].
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_flags(path.as_ref(), OpenFlags::default())
    }

    fn open_with_flags(path: &Path, flags: OpenFlags) -> Result<Self> {
        let connection = Connection::open_with_flags(path, flags)
            .and_then(|conn| Self::configure(&conn).map(|_| conn))
            .map_err(|e| InventoryError::storage_open(path, e))?;

        debug!("Opened database at {}", path.display());
        Self::with_connection(connection, MigrationPolicy::default())
            .map_err(|e| e.into_storage_open(path))
    }

    /// Opens a private in-memory database with the current schema.
    pub fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()
            .and_then(|conn| Self::configure(&conn).map(|_| conn))
            .map_err(|e| InventoryError::storage_open(":memory:", e))?;

        Self::with_connection(connection, MigrationPolicy::default())
    }

    fn with_connection(mut connection: Connection, policy: MigrationPolicy) -> Result<Self> {
        let migration = migrations::initialize_schema(&mut connection, policy)?;
        Ok(Self {
            connection,
            migration,
        })
    }

    /// Applies connection settings and verifies the file is readable and
    /// writable.
    ///
    /// SQLite opens files lazily, so a corrupt or foreign file only fails on
    /// first read; probing here keeps that failure on the open path. A file
    /// without write permission is silently opened read-only, which is
    /// rejected here as well.
    fn configure(connection: &Connection) -> rusqlite::Result<()> {
        connection.busy_timeout(BUSY_TIMEOUT)?;
        connection.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })?;
        if connection.is_readonly("main")? {
            return Err(rusqlite::Error::SqliteFailure(
                ffi::Error::new(ffi::SQLITE_READONLY),
                Some("database file is not writable".to_string()),
            ));
        }
        Ok(())
    }

    /// What schema initialization did when this database was opened.
    pub fn migration_outcome(&self) -> MigrationOutcome {
        self.migration
    }
}
