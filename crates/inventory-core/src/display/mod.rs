//! Display formatting for items and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes are formatted through newtype wrappers
//! so the same item can render differently in a list, after a create, or
//! after an update. All output is markdown, rendered by the CLI.
//!
//! Price rendering is a free function, [`format_price`], so the [`Item`]
//! definition carries no presentation concerns.
//!
//! ```rust
//! use inventory_core::{
//!     display::{format_price_with, CreateResult, CurrencyFormat},
//!     models::Item,
//! };
//!
//! let item = Item::new("Widget", 19.99, 3).with_id(1);
//! assert_eq!(format_price_with(&item, &CurrencyFormat::EN_US), "$19.99");
//!
//! let output = CreateResult::new(item).to_string();
//! assert!(output.contains("Created item with ID: 1"));
//! ```
//!
//! [`Item`]: crate::models::Item

pub mod collections;
pub mod models;
pub mod price;
pub mod results;

pub use collections::Items;
pub use price::{format_price, format_price_with, CurrencyFormat, SymbolPosition};
pub use results::{CreateResult, DeleteResult, UpdateResult};
