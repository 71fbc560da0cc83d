//! Item CRUD operations and queries.

use rusqlite::{params, OptionalExtension, Row, Transaction};

use crate::{
    error::{DatabaseResultExt, InventoryError, Result},
    models::{Item, ItemColumn},
};

// Column lists follow ItemColumn::ALL so rows decode by ItemColumn::index().
const INSERT_ITEM_SQL: &str = "INSERT INTO item (name, price, quantity) VALUES (?1, ?2, ?3)";
const INSERT_ITEM_WITH_ID_SQL: &str =
    "INSERT INTO item (id, name, price, quantity) VALUES (?1, ?2, ?3, ?4)";
const INSERT_ITEM_OR_IGNORE_SQL: &str = "INSERT INTO item (id, name, price, quantity) \
     VALUES (?1, ?2, ?3, ?4) ON CONFLICT(id) DO NOTHING";
const INSERT_ITEM_OR_REPLACE_SQL: &str = "INSERT INTO item (id, name, price, quantity) \
     VALUES (?1, ?2, ?3, ?4) ON CONFLICT(id) DO UPDATE SET \
     name = excluded.name, price = excluded.price, quantity = excluded.quantity";
const SELECT_ITEM_SQL: &str = "SELECT id, name, price, quantity FROM item WHERE id = ?1";
const SELECT_ITEMS_SQL: &str = "SELECT id, name, price, quantity FROM item ORDER BY name ASC, id ASC";
const COUNT_ITEMS_SQL: &str = "SELECT COUNT(*) FROM item";
const UPDATE_ITEM_SQL: &str = "UPDATE item SET name = ?1, price = ?2, quantity = ?3 WHERE id = ?4";
const DELETE_ITEM_SQL: &str = "DELETE FROM item WHERE id = ?1";

/// What an insert does when a row with the same explicit id already exists.
///
/// Only the id is subject to the strategy; other constraint failures always
/// abort the insert. Items inserted with the sentinel id never conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnConflict {
    /// Fail with [`InventoryError::ConstraintViolation`].
    Abort,
    /// Keep the existing row and return it.
    #[default]
    Ignore,
    /// Overwrite the existing row.
    Replace,
}

/// Decodes a row selected in [`ItemColumn::ALL`] order.
fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get::<_, i64>(ItemColumn::Id.index())? as u64,
        item_name: row.get(ItemColumn::Name.index())?,
        item_price: row.get(ItemColumn::Price.index())?,
        quantity_in_stock: row.get(ItemColumn::Quantity.index())?,
    })
}

/// Converts an item id to its SQLite representation. Ids beyond `i64::MAX`
/// cannot exist in the table.
fn sql_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

fn select_item(tx: &Transaction<'_>, id: i64) -> Result<Option<Item>> {
    tx.query_row(SELECT_ITEM_SQL, params![id], item_from_row)
        .optional()
        .db_context("Failed to query item")
}

impl super::Database {
    /// Inserts an item using the default [`OnConflict::Ignore`] strategy.
    ///
    /// An item carrying [`Item::UNASSIGNED_ID`] receives a new id from
    /// SQLite. Returns the stored record.
    pub fn insert_item(&mut self, item: &Item) -> Result<Item> {
        self.insert_item_with(item, OnConflict::default())
    }

    /// Inserts an item, resolving id conflicts with the given strategy.
    pub fn insert_item_with(&mut self, item: &Item, on_conflict: OnConflict) -> Result<Item> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let id = if item.is_persisted() {
            let id = sql_id(item.id).ok_or_else(|| {
                InventoryError::invalid_input("id").with_reason("id exceeds the storable range")
            })?;
            let sql = match on_conflict {
                OnConflict::Abort => INSERT_ITEM_WITH_ID_SQL,
                OnConflict::Ignore => INSERT_ITEM_OR_IGNORE_SQL,
                OnConflict::Replace => INSERT_ITEM_OR_REPLACE_SQL,
            };
            tx.execute(
                sql,
                params![id, item.item_name, item.item_price, item.quantity_in_stock],
            )
            .db_context("Failed to insert item")?;
            id
        } else {
            tx.execute(
                INSERT_ITEM_SQL,
                params![item.item_name, item.item_price, item.quantity_in_stock],
            )
            .db_context("Failed to insert item")?;
            tx.last_insert_rowid()
        };

        let stored = select_item(&tx, id)?.ok_or(InventoryError::ItemNotFound { id: id as u64 })?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(stored)
    }

    /// Replaces the stored row sharing `item.id` with `item`.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidInput` for an item that was never
    /// inserted and `InventoryError::ItemNotFound` when no row has the id.
    pub fn update_item(&mut self, item: &Item) -> Result<Item> {
        if !item.is_persisted() {
            return Err(InventoryError::invalid_input("id")
                .with_reason("cannot update an item that has not been inserted"));
        }
        let id = sql_id(item.id).ok_or(InventoryError::ItemNotFound { id: item.id })?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let changed = tx
            .execute(
                UPDATE_ITEM_SQL,
                params![item.item_name, item.item_price, item.quantity_in_stock, id],
            )
            .db_context("Failed to update item")?;
        if changed == 0 {
            return Err(InventoryError::ItemNotFound { id: item.id });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(item.clone())
    }

    /// Reads the item with `id`, derives a replacement with `change` and
    /// stores it, all in one transaction.
    ///
    /// The replacement always keeps the original id. An error from `change`
    /// aborts the transaction and leaves the row untouched.
    pub fn update_item_with<F>(&mut self, id: u64, change: F) -> Result<Item>
    where
        F: FnOnce(Item) -> Result<Item>,
    {
        let sql_id = sql_id(id).ok_or(InventoryError::ItemNotFound { id })?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = select_item(&tx, sql_id)?.ok_or(InventoryError::ItemNotFound { id })?;
        let updated = change(current)?.with_id(id);

        tx.execute(
            UPDATE_ITEM_SQL,
            params![
                updated.item_name,
                updated.item_price,
                updated.quantity_in_stock,
                sql_id
            ],
        )
        .db_context("Failed to update item")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(updated)
    }

    /// Deletes the item with the given id.
    pub fn delete_item(&mut self, id: u64) -> Result<()> {
        let sql_id = sql_id(id).ok_or(InventoryError::ItemNotFound { id })?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let deleted = tx
            .execute(DELETE_ITEM_SQL, params![sql_id])
            .db_context("Failed to delete item")?;
        if deleted == 0 {
            return Err(InventoryError::ItemNotFound { id });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Retrieves an item by its ID.
    pub fn get_item(&self, id: u64) -> Result<Option<Item>> {
        let Some(id) = sql_id(id) else {
            return Ok(None);
        };

        self.connection
            .query_row(SELECT_ITEM_SQL, params![id], item_from_row)
            .optional()
            .db_context("Failed to query item")
    }

    /// Lists all items ordered by name.
    pub fn list_items(&self) -> Result<Vec<Item>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ITEMS_SQL)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map([], item_from_row)
            .db_context("Failed to query items")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read items")?;

        Ok(items)
    }

    /// Number of stored items.
    pub fn count_items(&self) -> Result<u64> {
        let count: i64 = self
            .connection
            .query_row(COUNT_ITEMS_SQL, [], |row| row.get(0))
            .db_context("Failed to count items")?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn select_lists_follow_column_mapping() {
        let columns = ItemColumn::select_list();
        assert!(SELECT_ITEM_SQL.starts_with(&format!("SELECT {columns} FROM item")));
        assert!(SELECT_ITEMS_SQL.starts_with(&format!("SELECT {columns} FROM item")));
        assert!(INSERT_ITEM_WITH_ID_SQL.contains(&format!("({columns})")));
    }

    #[test]
    fn insert_with_conflict_strategies() {
        let mut db = Database::open_in_memory().unwrap();
        let original = db.insert_item(&Item::new("Bolt", 0.25, 10).with_id(5)).unwrap();
        assert_eq!(original.id, 5);

        let ignored = db
            .insert_item_with(&Item::new("Nut", 0.1, 1).with_id(5), OnConflict::Ignore)
            .unwrap();
        assert_eq!(ignored, original);

        let err = db
            .insert_item_with(&Item::new("Nut", 0.1, 1).with_id(5), OnConflict::Abort)
            .unwrap_err();
        assert!(matches!(err, InventoryError::ConstraintViolation { .. }));

        let replaced = db
            .insert_item_with(&Item::new("Nut", 0.1, 1).with_id(5), OnConflict::Replace)
            .unwrap();
        assert_eq!(replaced.item_name, "Nut");
        assert_eq!(db.count_items().unwrap(), 1);
    }

    #[test]
    fn sentinel_ids_continue_after_explicit_ids() {
        let mut db = Database::open_in_memory().unwrap();
        db.insert_item(&Item::new("Bolt", 0.25, 10).with_id(40)).unwrap();

        let next = db.insert_item(&Item::new("Nut", 0.1, 1)).unwrap();
        assert_eq!(next.id, 41);
    }

    #[test]
    fn nan_price_is_a_constraint_violation() {
        let mut db = Database::open_in_memory().unwrap();

        let err = db.insert_item(&Item::new("Broken", f64::NAN, 1)).unwrap_err();

        assert!(matches!(err, InventoryError::ConstraintViolation { .. }));
        assert_eq!(db.count_items().unwrap(), 0);
    }

    #[test]
    fn update_with_failure_leaves_row() {
        let mut db = Database::open_in_memory().unwrap();
        let item = db.insert_item(&Item::new("Bolt", 0.25, 10)).unwrap();

        let err = db
            .update_item_with(item.id, |_| Err(InventoryError::OutOfStock { id: item.id }))
            .unwrap_err();

        assert!(matches!(err, InventoryError::OutOfStock { .. }));
        assert_eq!(db.get_item(item.id).unwrap(), Some(item));
    }

    #[test]
    fn out_of_range_ids_are_absent() {
        let mut db = Database::open_in_memory().unwrap();
        assert_eq!(db.get_item(u64::MAX).unwrap(), None);
        assert!(matches!(
            db.delete_item(u64::MAX),
            Err(InventoryError::ItemNotFound { .. })
        ));
    }
}
