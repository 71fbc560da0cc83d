//! Item model definition.

use serde::{Deserialize, Serialize};

/// An inventory entry.
///
/// Values are treated as immutable records: changing a field produces a new
/// `Item` through one of the `with_*` methods, and persisting a change means
/// replacing the stored row with a record carrying the same `id`.
///
/// Serialized field names follow the storage column names rather than the
/// Rust field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Row identifier; [`Item::UNASSIGNED_ID`] until the item is inserted
    #[serde(default)]
    pub id: u64,

    /// Display name of the item
    #[serde(rename = "name")]
    pub item_name: String,

    /// Unit price in the store's currency
    #[serde(rename = "price")]
    pub item_price: f64,

    /// Units currently in stock
    #[serde(rename = "quantity")]
    pub quantity_in_stock: i64,
}

impl Item {
    /// Sentinel id asking the storage layer to assign a new identifier.
    pub const UNASSIGNED_ID: u64 = 0;

    /// Creates a transient item with no identity yet.
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            id: Self::UNASSIGNED_ID,
            item_name: name.into(),
            item_price: price,
            quantity_in_stock: quantity,
        }
    }

    /// Returns true once the storage layer has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id != Self::UNASSIGNED_ID
    }

    /// Returns true while at least one unit is in stock.
    pub fn is_stock_available(&self) -> bool {
        self.quantity_in_stock > 0
    }

    pub fn with_id(self, id: u64) -> Self {
        Self { id, ..self }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            item_name: name.into(),
            ..self
        }
    }

    pub fn with_price(self, price: f64) -> Self {
        Self {
            item_price: price,
            ..self
        }
    }

    pub fn with_quantity(self, quantity: i64) -> Self {
        Self {
            quantity_in_stock: quantity,
            ..self
        }
    }
}
