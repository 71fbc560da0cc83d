//! Schema initialization and the destructive migration policy.
//!
//! The schema version lives in `PRAGMA user_version`. A database whose
//! version or `item` table layout differs from the declared schema is
//! treated as mismatched. There is no upgrade path: under
//! [`MigrationPolicy::FallbackToDestructive`] every user table is dropped and
//! the schema recreated, which discards all stored items.

use log::{debug, warn};
use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{ItemColumn, ITEM_TABLE},
};

/// Declared schema version.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");

const TABLE_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)";
const TABLE_COLUMNS_SQL: &str =
    "SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid";
const USER_OBJECTS_SQL: &str = "SELECT type, name FROM sqlite_master \
     WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'";

/// How a schema mismatch is resolved when the database is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MigrationPolicy {
    /// Drop all tables and recreate the schema, losing existing rows.
    #[default]
    FallbackToDestructive,
}

/// What schema initialization did on open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The database was empty and the schema was created.
    Created,
    /// The stored schema already matched.
    UpToDate,
    /// The stored schema did not match and was dropped and recreated.
    Recreated {
        from_version: u32,
        dropped_rows: u64,
    },
}

/// One row of `pragma_table_info` for the item table.
#[derive(Debug)]
struct StoredColumn {
    name: String,
    ty: String,
    not_null: bool,
    primary_key: bool,
}

/// Brings the connection's schema to [`SCHEMA_VERSION`].
///
/// Inspection and any create or recreate run in one immediate transaction,
/// so another connection cannot change the schema in between.
pub(super) fn initialize_schema(
    connection: &mut Connection,
    policy: MigrationPolicy,
) -> Result<MigrationOutcome> {
    let tx = connection
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .db_context("Failed to begin transaction")?;

    let version: u32 = tx
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .db_context("Failed to read schema version")?;
    let columns = item_table_columns(&tx)?;

    let outcome = match (version, columns) {
        (0, None) => {
            tx.execute_batch(SCHEMA_SQL)
                .db_context("Failed to initialize database schema")?;
            MigrationOutcome::Created
        }
        (SCHEMA_VERSION, Some(columns)) => match layout_mismatch(&columns) {
            None => MigrationOutcome::UpToDate,
            Some(reason) => {
                debug!("Item table layout differs: {reason}");
                resolve_mismatch(&tx, policy, SCHEMA_VERSION, true)?
            }
        },
        (from_version, columns) => resolve_mismatch(&tx, policy, from_version, columns.is_some())?,
    };

    if outcome != MigrationOutcome::UpToDate {
        tx.pragma_update(None, "user_version", SCHEMA_VERSION)
            .db_context("Failed to set schema version")?;
    }
    tx.commit().db_context("Failed to commit transaction")?;

    match outcome {
        MigrationOutcome::Created => debug!("Created schema version {SCHEMA_VERSION}"),
        MigrationOutcome::Recreated {
            from_version,
            dropped_rows,
        } => warn!(
            "Stored schema (version {from_version}) does not match version {SCHEMA_VERSION}; \
             recreated database and discarded {dropped_rows} item(s)"
        ),
        MigrationOutcome::UpToDate => {}
    }

    Ok(outcome)
}

/// Returns the columns of the item table, or `None` when the table does not
/// exist.
fn item_table_columns(connection: &Connection) -> Result<Option<Vec<StoredColumn>>> {
    let exists: bool = connection
        .query_row(TABLE_EXISTS_SQL, [ITEM_TABLE], |row| row.get(0))
        .db_context("Failed to inspect schema")?;
    if !exists {
        return Ok(None);
    }

    let mut stmt = connection
        .prepare(TABLE_COLUMNS_SQL)
        .db_context("Failed to prepare query")?;
    let columns = stmt
        .query_map([ITEM_TABLE], |row| {
            Ok(StoredColumn {
                name: row.get(0)?,
                ty: row.get(1)?,
                not_null: row.get::<_, i64>(2)? != 0,
                primary_key: row.get::<_, i64>(3)? != 0,
            })
        })
        .db_context("Failed to inspect item table")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read item table columns")?;

    Ok(Some(columns))
}

/// Describes the first difference between the stored item table and the
/// declared layout, or `None` when they match.
fn layout_mismatch(columns: &[StoredColumn]) -> Option<String> {
    if columns.len() != ItemColumn::ALL.len() {
        return Some(format!(
            "expected {} columns, found {}",
            ItemColumn::ALL.len(),
            columns.len()
        ));
    }

    columns.iter().zip(ItemColumn::ALL).find_map(|(stored, expected)| {
        let Some(column) = ItemColumn::from_column_name(&stored.name) else {
            return Some(format!("unknown column `{}`", stored.name));
        };
        if column != expected {
            return Some(format!(
                "column `{}` where `{}` belongs",
                stored.name,
                expected.column_name()
            ));
        }

        let matches = stored.ty.eq_ignore_ascii_case(column.sql_type())
            && stored.primary_key == column.is_primary_key()
            && stored.not_null == column.is_not_null();
        (!matches).then(|| {
            format!(
                "column `{}` (field `{}`) is `{}`, expected `{}`",
                stored.name,
                column.field_name(),
                describe_stored(stored),
                describe_declared(column)
            )
        })
    })
}

fn describe_stored(stored: &StoredColumn) -> String {
    describe(&stored.ty, stored.primary_key, stored.not_null)
}

fn describe_declared(column: ItemColumn) -> String {
    describe(column.sql_type(), column.is_primary_key(), column.is_not_null())
}

fn describe(ty: &str, primary_key: bool, not_null: bool) -> String {
    let mut text = ty.to_string();
    if primary_key {
        text.push_str(" PRIMARY KEY");
    }
    if not_null {
        text.push_str(" NOT NULL");
    }
    text
}

fn resolve_mismatch(
    tx: &Transaction<'_>,
    policy: MigrationPolicy,
    from_version: u32,
    has_item_table: bool,
) -> Result<MigrationOutcome> {
    match policy {
        MigrationPolicy::FallbackToDestructive => {
            recreate_schema(tx, from_version, has_item_table)
        }
    }
}

fn recreate_schema(
    tx: &Transaction<'_>,
    from_version: u32,
    has_item_table: bool,
) -> Result<MigrationOutcome> {
    let dropped_rows: i64 = if has_item_table {
        tx.query_row(&format!("SELECT COUNT(*) FROM \"{ITEM_TABLE}\""), [], |row| {
            row.get(0)
        })
        .db_context("Failed to count stored items")?
    } else {
        0
    };

    let objects = {
        let mut stmt = tx
            .prepare(USER_OBJECTS_SQL)
            .db_context("Failed to prepare query")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .db_context("Failed to list schema objects")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to list schema objects")?
    };

    for (kind, name) in &objects {
        let keyword = if kind == "view" { "VIEW" } else { "TABLE" };
        let quoted = name.replace('"', "\"\"");
        tx.execute_batch(&format!("DROP {keyword} IF EXISTS \"{quoted}\""))
            .db_context("Failed to drop schema object")?;
    }

    tx.execute_batch(SCHEMA_SQL)
        .db_context("Failed to initialize database schema")?;

    Ok(MigrationOutcome::Recreated {
        from_version,
        dropped_rows: dropped_rows.max(0) as u64,
    })
}
