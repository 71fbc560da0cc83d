//! Display implementations for domain models.

use std::fmt;

use super::price::format_price;
use crate::models::Item;

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.item_name)?;
        writeln!(f)?;
        writeln!(f, "- Price: {}", format_price(self))?;
        if self.is_stock_available() {
            writeln!(f, "- Quantity: {}", self.quantity_in_stock)
        } else {
            writeln!(f, "- Quantity: {} (out of stock)", self.quantity_in_stock)
        }
    }
}
