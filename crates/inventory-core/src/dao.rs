//! Data-access object for items.

use crate::{
    db::OnConflict,
    error::Result,
    handle::ItemDatabase,
    models::Item,
};

/// Item operations on a shared [`ItemDatabase`].
///
/// Each call takes the handle's connection lock for its own duration, so a
/// DAO can be used freely from several threads.
#[derive(Debug, Clone, Copy)]
pub struct ItemDao<'a> {
    database: &'a ItemDatabase,
}

impl<'a> ItemDao<'a> {
    pub(crate) fn new(database: &'a ItemDatabase) -> Self {
        Self { database }
    }

    /// Inserts an item; an existing row with the same explicit id is kept.
    pub fn insert(&self, item: &Item) -> Result<Item> {
        self.database.lock().insert_item(item)
    }

    /// Inserts an item with an explicit id-conflict strategy.
    pub fn insert_with(&self, item: &Item, on_conflict: OnConflict) -> Result<Item> {
        self.database.lock().insert_item_with(item, on_conflict)
    }

    /// Replaces the row sharing `item.id`.
    pub fn update(&self, item: &Item) -> Result<Item> {
        self.database.lock().update_item(item)
    }

    /// Applies `change` to the stored item atomically.
    pub fn update_with<F>(&self, id: u64, change: F) -> Result<Item>
    where
        F: FnOnce(Item) -> Result<Item>,
    {
        self.database.lock().update_item_with(id, change)
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        self.database.lock().delete_item(id)
    }

    pub fn get_item(&self, id: u64) -> Result<Option<Item>> {
        self.database.lock().get_item(id)
    }

    /// All items ordered by name.
    pub fn get_items(&self) -> Result<Vec<Item>> {
        self.database.lock().list_items()
    }

    pub fn count(&self) -> Result<u64> {
        self.database.lock().count_items()
    }
}
