//! Lazily constructed, process-wide database handle.
//!
//! [`get_database`] returns the single [`ItemDatabase`] of the process,
//! opening it on first use. Once published, the handle is read without any
//! locking. Concurrent first calls serialize on an init mutex and re-check
//! the published slot after acquiring it, so exactly one handle (and one
//! open of the database file) is ever constructed.
//!
//! A failed construction publishes nothing. The error goes to the caller
//! that attempted it, and the next call tries again.
//!
//! ```no_run
//! use inventory_core::{get_database, AppContext, Item};
//!
//! # fn main() -> inventory_core::Result<()> {
//! let context = AppContext::from_env()?;
//! let database = get_database(&context)?;
//! let item = database.item_dao().insert(&Item::new("Hammer", 12.5, 3))?;
//! assert!(item.id > 0);
//!
//! // Later calls return the same handle.
//! assert!(std::ptr::eq(database, get_database(&context)?));
//! # Ok(())
//! # }
//! ```

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex, OnceLock, PoisonError,
};

use log::debug;

use crate::{context::AppContext, error::Result, handle::ItemDatabase};

static PROVIDER: DatabaseProvider = DatabaseProvider::new();

/// Returns the process-wide item database, opening it on first call.
///
/// Later calls return the same handle regardless of the context passed;
/// the context of the first successful call decides which file is opened.
///
/// # Errors
///
/// Returns `InventoryError::FileSystem` if the data directory cannot be
/// created and `InventoryError::StorageOpen` if the database file cannot be
/// opened.
pub fn get_database(context: &AppContext) -> Result<&'static ItemDatabase> {
    PROVIDER.get_or_open(context)
}

/// One-time holder of an [`ItemDatabase`].
///
/// The process-wide instance backs [`get_database`]; separate instances are
/// useful where an isolated handle lifecycle is needed.
pub struct DatabaseProvider {
    instance: OnceLock<ItemDatabase>,
    init_lock: Mutex<()>,
    constructions: AtomicUsize,
}

impl DatabaseProvider {
    pub const fn new() -> Self {
        Self {
            instance: OnceLock::new(),
            init_lock: Mutex::new(()),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Returns the published handle, opening the context's database first
    /// if there is none yet.
    pub fn get_or_open(&self, context: &AppContext) -> Result<&ItemDatabase> {
        self.get_or_try_init(|| ItemDatabase::open(context))
    }

    /// Returns the published handle, constructing it with `init` if there is
    /// none yet. `init` runs at most once per successful publication and
    /// never concurrently with itself.
    pub fn get_or_try_init<F>(&self, init: F) -> Result<&ItemDatabase>
    where
        F: FnOnce() -> Result<ItemDatabase>,
    {
        if let Some(database) = self.instance.get() {
            return Ok(database);
        }

        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Another thread may have finished construction while we waited.
        if let Some(database) = self.instance.get() {
            return Ok(database);
        }

        let database = init()?;
        self.constructions.fetch_add(1, Ordering::Relaxed);
        debug!("Constructed item database handle at {}", database.path().display());

        Ok(self.instance.get_or_init(|| database))
    }

    /// The published handle, if any.
    pub fn get(&self) -> Option<&ItemDatabase> {
        self.instance.get()
    }

    /// Number of handles this provider has constructed: 0 or 1.
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::Relaxed)
    }
}

impl Default for DatabaseProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Barrier, thread, time::Duration};

    use super::*;
    use crate::{error::InventoryError, models::Item};

    #[test]
    fn starts_uninitialized() {
        let provider = DatabaseProvider::new();
        assert!(provider.get().is_none());
        assert_eq!(provider.constructions(), 0);
    }

    #[test]
    fn concurrent_first_access_constructs_once() {
        const THREADS: usize = 16;
        let temp_dir = tempfile::TempDir::new().unwrap();
        let context = AppContext::new(temp_dir.path().join("data"));
        let provider = DatabaseProvider::new();
        let barrier = Barrier::new(THREADS);
        let (barrier, provider_ref, context_ref) = (&barrier, &provider, &context);

        let addresses: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(move || {
                        barrier.wait();
                        let database = provider_ref.get_or_open(context_ref).unwrap();
                        database as *const ItemDatabase as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(provider.constructions(), 1);
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        let files: Vec<_> = std::fs::read_dir(context.data_dir())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name() == crate::context::DATABASE_NAME)
            .collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn slow_construction_is_not_repeated() {
        let provider = DatabaseProvider::new();
        let calls = AtomicUsize::new(0);

        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    provider
                        .get_or_try_init(|| {
                            calls.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(Duration::from_millis(50));
                            ItemDatabase::open_in_memory()
                        })
                        .unwrap();
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.constructions(), 1);
    }

    #[test]
    fn handle_is_fully_usable_from_every_thread() {
        let provider = DatabaseProvider::new();

        thread::scope(|scope| {
            for i in 0..4 {
                let provider = &provider;
                scope.spawn(move || {
                    let database = provider
                        .get_or_try_init(ItemDatabase::open_in_memory)
                        .unwrap();
                    database
                        .item_dao()
                        .insert(&Item::new(format!("item-{i}"), 1.0, i))
                        .unwrap();
                });
            }
        });

        let database = provider.get().unwrap();
        assert_eq!(database.item_dao().count().unwrap(), 4);
    }

    #[test]
    fn failed_construction_publishes_nothing() {
        let provider = DatabaseProvider::new();

        let err = provider
            .get_or_try_init(|| {
                Err(InventoryError::Configuration {
                    message: "boom".into(),
                })
            })
            .unwrap_err();
        assert!(matches!(err, InventoryError::Configuration { .. }));
        assert!(provider.get().is_none());
        assert_eq!(provider.constructions(), 0);

        provider
            .get_or_try_init(ItemDatabase::open_in_memory)
            .unwrap();
        assert_eq!(provider.constructions(), 1);
    }

    #[test]
    fn unopenable_location_fails_then_recovers() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let provider = DatabaseProvider::new();

        let bad = AppContext::new(temp_file.path().join("data"));
        assert!(matches!(
            provider.get_or_open(&bad),
            Err(InventoryError::FileSystem { .. })
        ));
        assert!(provider.get().is_none());

        let temp_dir = tempfile::TempDir::new().unwrap();
        let good = AppContext::new(temp_dir.path());
        let database = provider.get_or_open(&good).unwrap();
        assert_eq!(database.path(), good.database_path());
    }

    #[test]
    fn later_contexts_are_ignored_once_initialized() {
        let first = tempfile::TempDir::new().unwrap();
        let second = tempfile::TempDir::new().unwrap();
        let provider = DatabaseProvider::new();

        let a = provider.get_or_open(&AppContext::new(first.path())).unwrap();
        let b = provider.get_or_open(&AppContext::new(second.path())).unwrap();

        assert!(std::ptr::eq(a, b));
        assert_eq!(b.path(), first.path().join("item_database"));
        assert!(!second.path().join("item_database").exists());
    }
}
