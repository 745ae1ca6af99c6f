//! Row filtering, projection and de-duplication.

use std::collections::HashSet;

use crate::datasets::{Table, Value};
use crate::error::RegistryResult;

/// Keep the rows whose cell in `column` equals `value`.
///
/// No error cases beyond a missing column; an empty result is a table with
/// the same schema and no rows.
pub fn filter_equals(table: &Table, column: &str, value: &Value) -> RegistryResult<Table> {
    let idx = table.column_index(column)?;
    let rows = table
        .rows()
        .iter()
        .filter(|row| &row[idx] == value)
        .cloned()
        .collect();
    Ok(Table::from_parts(table.columns().to_vec(), rows))
}

/// Project the named columns, in the given order.
pub fn select_columns(table: &Table, columns: &[&str]) -> RegistryResult<Table> {
    let indices = columns
        .iter()
        .map(|name| table.column_index(name))
        .collect::<RegistryResult<Vec<_>>>()?;
    let rows = table
        .rows()
        .iter()
        .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
        .collect();
    Ok(Table::from_parts(
        columns.iter().map(|c| c.to_string()).collect(),
        rows,
    ))
}

/// Remove duplicate rows by full-row equality.
///
/// Stable: survivors keep the first-occurrence order from the source table.
pub fn drop_duplicates(table: &Table) -> Table {
    let mut seen = HashSet::new();
    let rows = table
        .rows()
        .iter()
        .filter(|row| seen.insert((*row).clone()))
        .cloned()
        .collect();
    Table::from_parts(table.columns().to_vec(), rows)
}
