//! Tests for the process-wide handle. Every test in this binary shares the
//! same singleton, so they all use the same data directory.

use std::{
    sync::{Barrier, OnceLock},
    thread,
};

use inventory_core::{get_database, AppContext, Item, ItemDatabase};
use tempfile::TempDir;

fn shared_context() -> AppContext {
    static DATA_DIR: OnceLock<TempDir> = OnceLock::new();
    let dir = DATA_DIR.get_or_init(|| TempDir::new().expect("Failed to create temp dir"));
    AppContext::new(dir.path().join("data"))
}

#[test]
fn test_concurrent_first_access_returns_one_handle() {
    const THREADS: usize = 12;
    let context = shared_context();
    let barrier = Barrier::new(THREADS);
    let (barrier, context_ref) = (&barrier, &context);

    let handles: Vec<&'static ItemDatabase> = thread::scope(|scope| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(move || {
                    barrier.wait();
                    get_database(context_ref).expect("Failed to get database")
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    assert!(handles.windows(2).all(|w| std::ptr::eq(w[0], w[1])));
    assert_eq!(handles[0].path(), context.database_path());
    assert!(context.database_path().exists());
}

#[test]
fn test_handle_serves_crud_operations() {
    let context = shared_context();
    let database = get_database(&context).expect("Failed to get database");
    let dao = database.item_dao();

    let item = dao.insert(&Item::new("Tape Measure", 6.0, 4)).unwrap();
    assert!(item.id > 0);
    assert!(std::ptr::eq(database, get_database(&context).unwrap()));

    dao.update(&item.clone().with_quantity(3)).unwrap();
    assert_eq!(dao.get_item(item.id).unwrap().unwrap().quantity_in_stock, 3);

    dao.delete(item.id).unwrap();
    assert_eq!(dao.get_item(item.id).unwrap(), None);
}
