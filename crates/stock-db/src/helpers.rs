//! Row-to-entity parsing.

use stock_core::entities::Item;

use crate::error::DatabaseError;

/// Column list shared by every item query, in `row_to_item` order.
pub const ITEM_COLS: &str = "id, name, time, tags, amount";

/// Convert a row selected with [`ITEM_COLS`] into an `Item`.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if `amount` is negative or too large,
/// or `DatabaseError::LibSql` if a column has the wrong type.
pub fn row_to_item(row: &libsql::Row) -> Result<Item, DatabaseError> {
    let id: i64 = row.get(0)?;
    let raw_amount: i64 = row.get(4)?;
    let amount = u32::try_from(raw_amount).map_err(|_| {
        DatabaseError::InvalidState(format!("item {id} has invalid amount {raw_amount}"))
    })?;
    Ok(Item {
        id,
        name: row.get(1)?,
        time: row.get(2)?,
        tags: row.get(3)?,
        amount,
    })
}
