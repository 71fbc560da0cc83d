//! Error types for the inventory library.

use std::path::{Path, PathBuf};

use rusqlite::ErrorCode;
use thiserror::Error;

/// Comprehensive error type for all inventory operations.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// The database file could not be opened or created
    #[error("Failed to open database at '{path}': {source}")]
    StorageOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    /// Database query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A write violated a column constraint
    #[error("Constraint violation: {message}")]
    ConstraintViolation {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Item not found for the given ID
    #[error("Item with ID {id} not found")]
    ItemNotFound { id: u64 },
    /// Item has no stock left to sell
    #[error("Item with ID {id} is out of stock")]
    OutOfStock { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG base directory errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    ///
    /// SQLite constraint failures become
    /// [`InventoryError::ConstraintViolation`]; everything else is reported
    /// as [`InventoryError::Database`].
    pub fn with_source(self, source: rusqlite::Error) -> InventoryError {
        if source.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
            InventoryError::ConstraintViolation {
                message: self.message,
                source,
            }
        } else {
            InventoryError::Database {
                message: self.message,
                source,
            }
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> InventoryError {
        InventoryError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl InventoryError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a storage-open error for the given path.
    pub fn storage_open(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        Self::StorageOpen {
            path: path.into(),
            source,
        }
    }

    /// Reports a database error caused by the file itself (permissions, a
    /// full disk, a foreign or corrupt file) as a storage-open failure.
    /// Other errors pass through unchanged.
    pub(crate) fn into_storage_open(self, path: &Path) -> Self {
        match self {
            Self::Database { source, .. } if is_storage_failure(&source) => {
                Self::storage_open(path, source)
            }
            other => other,
        }
    }
}

fn is_storage_failure(source: &rusqlite::Error) -> bool {
    matches!(
        source.sqlite_error_code(),
        Some(
            ErrorCode::ReadOnly
                | ErrorCode::CannotOpen
                | ErrorCode::DiskFull
                | ErrorCode::PermissionDenied
                | ErrorCode::NotADatabase
                | ErrorCode::DatabaseCorrupt
        )
    )
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| InventoryError::database(message).with_source(e))
    }
}

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use rusqlite::{ffi, Connection};

    use super::*;

    #[test]
    fn constraint_failures_map_to_constraint_violation() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (v TEXT NOT NULL)").unwrap();

        let err = conn
            .execute("INSERT INTO t (v) VALUES (NULL)", [])
            .db_context("Failed to insert")
            .unwrap_err();

        assert!(matches!(err, InventoryError::ConstraintViolation { .. }));
        assert!(err.to_string().contains("Failed to insert"));
    }

    #[test]
    fn other_failures_map_to_database() {
        let source = rusqlite::Error::SqliteFailure(
            ffi::Error::new(ffi::SQLITE_BUSY),
            Some("database is locked".to_string()),
        );
        let err = InventoryError::database("Failed to query").with_source(source);

        assert!(matches!(err, InventoryError::Database { .. }));
        assert_eq!(err.to_string(), "Database error: Failed to query");
    }

    #[test]
    fn storage_failures_are_reclassified_on_open() {
        let read_only = rusqlite::Error::SqliteFailure(
            ffi::Error::new(ffi::SQLITE_READONLY),
            Some("attempt to write a readonly database".to_string()),
        );
        let err = InventoryError::database("Failed to initialize database schema")
            .with_source(read_only)
            .into_storage_open(Path::new("/data/item_database"));
        assert!(matches!(
            err,
            InventoryError::StorageOpen { ref path, .. } if path == Path::new("/data/item_database")
        ));

        let busy = rusqlite::Error::SqliteFailure(ffi::Error::new(ffi::SQLITE_BUSY), None);
        let err = InventoryError::database("Failed to begin transaction")
            .with_source(busy)
            .into_storage_open(Path::new("/data/item_database"));
        assert!(matches!(err, InventoryError::Database { .. }));
    }

    #[test]
    fn invalid_input_builder() {
        let err = InventoryError::invalid_input("name").with_reason("must not be blank");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': must not be blank"
        );
    }
}
