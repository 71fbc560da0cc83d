//! Parameter structures for inventory operations.
//!
//! These are plain structures shared by every interface (the CLI today)
//! without framework-specific derives. Interface layers define their own
//! argument types and convert into these with `From`.

use crate::error::{InventoryError, Result};

/// Parameters for adding a new item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl NewItem {
    /// Checks every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        validate_quantity(self.quantity)
    }
}

/// Parameters for changing an existing item. Fields left as `None` keep
/// their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateItem {
    pub id: u64,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl UpdateItem {
    /// Checks the fields that are present.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        Ok(())
    }

    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.quantity.is_none()
    }
}

/// Generic ID parameter for operations targeting a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id {
    pub id: u64,
}

impl From<u64> for Id {
    fn from(id: u64) -> Self {
        Id { id }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(InventoryError::invalid_input("name").with_reason("must not be blank"));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(InventoryError::invalid_input("price").with_reason("must be a finite number"));
    }
    if price < 0.0 {
        return Err(InventoryError::invalid_input("price").with_reason("must not be negative"));
    }
    Ok(())
}

fn validate_quantity(quantity: i64) -> Result<()> {
    if quantity < 0 {
        return Err(InventoryError::invalid_input("quantity").with_reason("must not be negative"));
    }
    Ok(())
}
