//! Collection wrapper types for displaying groups of items.

use std::fmt;

use crate::models::Item;

/// Newtype wrapper for displaying a list of items.
///
/// Items are separated by blank lines; an empty list renders a short notice
/// instead of nothing.
///
/// ```rust
/// use inventory_core::{display::Items, models::Item};
///
/// let items = Items(vec![Item::new("Bolt", 0.25, 100).with_id(1)]);
/// assert!(items.to_string().contains("### 1. Bolt"));
/// assert_eq!(Items(vec![]).to_string(), "No items in inventory.\n");
/// ```
pub struct Items(pub Vec<Item>);

impl Items {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No items in inventory.");
        }

        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
