//! Inner equi-join over two tables.

use std::collections::HashMap;

use crate::datasets::{Table, Value};
use crate::error::RegistryResult;

/// Inner join on the shared `key` column, keyed by the left side.
///
/// Output iterates left rows in order and emits one merged row per matching
/// right row (right-side order preserved within a key). The key column
/// appears once, from the left side. Rows without a match on the other side
/// produce no output and no error. Duplicate keys expand Cartesian-style,
/// one merged row per pair; callers that need one-or-zero matches per row
/// keep the keyed side unique upstream.
///
/// Column names other than `key` must not collide between the two sides.
pub fn inner_join(left: &Table, right: &Table, key: &str) -> RegistryResult<Table> {
    let left_key = left.column_index(key)?;
    let right_key = right.column_index(key)?;

    let mut right_by_key: HashMap<&Value, Vec<&Vec<Value>>> = HashMap::new();
    for row in right.rows() {
        right_by_key.entry(&row[right_key]).or_default().push(row);
    }

    let kept_right: Vec<usize> = (0..right.columns().len())
        .filter(|&i| i != right_key)
        .collect();

    let mut columns = left.columns().to_vec();
    columns.extend(kept_right.iter().map(|&i| right.columns()[i].clone()));

    let mut rows = Vec::new();
    for left_row in left.rows() {
        if let Some(matches) = right_by_key.get(&left_row[left_key]) {
            for right_row in matches {
                let mut row = left_row.clone();
                row.extend(kept_right.iter().map(|&i| right_row[i].clone()));
                rows.push(row);
            }
        }
    }

    Ok(Table::from_parts(columns, rows))
}
