//! Data models for inventory items.
//!
//! [`Item`] is the persisted record. Its in-memory field names differ from
//! the on-disk column names; [`ItemColumn`] is the single table that maps one
//! to the other, so fields can be renamed in Rust without touching the stored
//! schema.
//!
//! Display implementations live in [`crate::display`], keeping presentation
//! (markdown output, currency formatting) out of the model definitions.
//!
//! # Examples
//!
//! ```rust
//! use inventory_core::models::{Item, ItemColumn};
//!
//! let item = Item::new("Screwdriver", 4.5, 12);
//! assert!(!item.is_persisted());
//! assert_eq!(ItemColumn::Name.column_name(), "name");
//! assert_eq!(ItemColumn::Name.field_name(), "item_name");
//! ```

pub mod column;
pub mod item;


pub use column::{ItemColumn, ITEM_TABLE};
pub use item::Item;
