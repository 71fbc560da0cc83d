//! Stock operations for the Inventory.

use super::Inventory;
use crate::{
    error::{InventoryError, Result},
    models::Item,
    params::Id,
};

impl Inventory {
    /// Sells one unit of an item, decreasing its stock by one.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::OutOfStock` when no units are left; the stored
    /// item is unchanged in that case.
    pub async fn sell_item(&self, params: &Id) -> Result<Item> {
        let id = params.id;
        self.run_blocking(move |database| {
            database.item_dao().update_with(id, |item| {
                if !item.is_stock_available() {
                    return Err(InventoryError::OutOfStock { id });
                }
                let remaining = item.quantity_in_stock - 1;
                Ok(item.with_quantity(remaining))
            })
        })
        .await
    }

    /// Returns true if at least one unit of the item is in stock.
    pub fn is_stock_available(&self, item: &Item) -> bool {
        item.is_stock_available()
    }
}
