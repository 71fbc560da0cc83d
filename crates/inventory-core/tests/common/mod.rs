use inventory_core::{AppContext, Database};
use tempfile::TempDir;

/// Helper function to create a database file inside a temporary data
/// directory
pub fn create_test_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::new(database_path(&temp_dir)).expect("Failed to create test database");
    (temp_dir, db)
}

/// Path of the item database inside a temporary data directory
pub fn database_path(temp_dir: &TempDir) -> std::path::PathBuf {
    AppContext::new(temp_dir.path()).database_path()
}
