//! Item operations for the Inventory.

use log::debug;

use super::Inventory;
use crate::{
    error::{InventoryError, Result},
    models::Item,
    params::{Id, NewItem, UpdateItem},
};

impl Inventory {
    /// Validates and stores a new item, returning it with its assigned id.
    pub async fn add_item(&self, params: &NewItem) -> Result<Item> {
        params.validate()?;
        let item = Item::new(params.name.trim(), params.price, params.quantity);

        let item = self
            .run_blocking(move |database| database.item_dao().insert(&item))
            .await?;
        debug!("Added item {} ({})", item.id, item.item_name);
        Ok(item)
    }

    /// Retrieves an item by its ID.
    pub async fn get_item(&self, params: &Id) -> Result<Option<Item>> {
        let id = params.id;
        self.run_blocking(move |database| database.item_dao().get_item(id))
            .await
    }

    /// Lists all items ordered by name.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        self.run_blocking(|database| database.item_dao().get_items())
            .await
    }

    /// Applies the present fields of `params` to the stored item.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidInput` if no field is given or a given
    /// field is invalid, and `InventoryError::ItemNotFound` for unknown ids.
    pub async fn update_item(&self, params: &UpdateItem) -> Result<Item> {
        if params.is_empty() {
            return Err(InventoryError::invalid_input("update")
                .with_reason("at least one of name, price or quantity is required"));
        }
        params.validate()?;

        let params = params.clone();
        self.run_blocking(move |database| {
            database.item_dao().update_with(params.id, |item| {
                let mut item = item;
                if let Some(name) = params.name {
                    item = item.with_name(name.trim());
                }
                if let Some(price) = params.price {
                    item = item.with_price(price);
                }
                if let Some(quantity) = params.quantity {
                    item = item.with_quantity(quantity);
                }
                Ok(item)
            })
        })
        .await
    }

    /// Removes an item, returning the record as it was before deletion.
    pub async fn remove_item(&self, params: &Id) -> Result<Item> {
        let id = params.id;
        self.run_blocking(move |database| {
            let mut db = database.lock();
            let item = db.get_item(id)?.ok_or(InventoryError::ItemNotFound { id })?;
            db.delete_item(id)?;
            Ok(item)
        })
        .await
    }
}
