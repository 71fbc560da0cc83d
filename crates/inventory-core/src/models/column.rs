//! Mapping between [`Item`](super::Item) fields and `item` table columns.

/// Name of the table holding items.
pub const ITEM_TABLE: &str = "item";

/// One column of the `item` table.
///
/// Each variant knows both its stored column name and the Rust field it
/// backs. The declaration order is the column order of the table and of
/// every `SELECT` issued against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemColumn {
    Id,
    Name,
    Price,
    Quantity,
}

impl ItemColumn {
    /// All columns in table order.
    pub const ALL: [ItemColumn; 4] = [
        ItemColumn::Id,
        ItemColumn::Name,
        ItemColumn::Price,
        ItemColumn::Quantity,
    ];

    /// Column name as stored on disk.
    pub fn column_name(self) -> &'static str {
        match self {
            ItemColumn::Id => "id",
            ItemColumn::Name => "name",
            ItemColumn::Price => "price",
            ItemColumn::Quantity => "quantity",
        }
    }

    /// Field name on the in-memory record.
    pub fn field_name(self) -> &'static str {
        match self {
            ItemColumn::Id => "id",
            ItemColumn::Name => "item_name",
            ItemColumn::Price => "item_price",
            ItemColumn::Quantity => "quantity_in_stock",
        }
    }

    /// Declared SQLite type of the column.
    pub fn sql_type(self) -> &'static str {
        match self {
            ItemColumn::Id | ItemColumn::Quantity => "INTEGER",
            ItemColumn::Name => "TEXT",
            ItemColumn::Price => "REAL",
        }
    }

    /// Whether the column is the table's primary key.
    pub fn is_primary_key(self) -> bool {
        matches!(self, ItemColumn::Id)
    }

    /// Whether the column is declared `NOT NULL`. The key column is not;
    /// SQLite fills it in.
    pub fn is_not_null(self) -> bool {
        !self.is_primary_key()
    }

    /// Position of the column in a row selected with [`ItemColumn::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up a column by its stored name.
    pub fn from_column_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.column_name() == name)
    }

    /// Comma-separated column list in table order, for `SELECT` clauses.
    pub fn select_list() -> String {
        Self::ALL
            .iter()
            .map(|c| c.column_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
