//! Wide-matrix reshape of grouped counts.

use std::collections::HashMap;

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use crate::datasets::{Table, Value};
use crate::error::RegistryResult;

/// One cell of a pivot matrix.
///
/// `Missing` marks a (row, column) combination with no observations and
/// serializes as the `"NULL"` string, so consumers can tell it apart from a
/// numeric zero.
#[derive(Debug, Clone, PartialEq)]
pub enum PivotCell {
    Key(Value),
    Count(i64),
    Missing,
}

impl Serialize for PivotCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PivotCell::Key(value) => value.serialize(serializer),
            PivotCell::Count(n) => serializer.serialize_i64(*n),
            PivotCell::Missing => serializer.serialize_str("NULL"),
        }
    }
}

/// A pivoted count matrix.
///
/// Serializes as a list of lists whose first element is the header row
/// (row-key column names followed by one label per pivoted column value).
#[derive(Debug, Clone, PartialEq)]
pub struct PivotMatrix {
    header: Vec<String>,
    rows: Vec<Vec<PivotCell>>,
}

impl PivotMatrix {
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn data_rows(&self) -> &[Vec<PivotCell>] {
        &self.rows
    }

    /// Number of serialized elements, header row included.
    pub fn len(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for PivotMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len() + 1))?;
        seq.serialize_element(&self.header)?;
        for row in &self.rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

fn label(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        Value::Int(n) => n.to_string(),
        Value::Null => "NULL".to_string(),
    }
}

/// Pivot `table` into a matrix: one row per distinct `row_keys` tuple, one
/// column per distinct `column_key` value, cells counting the rows with that
/// combination.
///
/// Row and column order is the first-occurrence order observed scanning the
/// table top to bottom, never a sort. Combinations that never occur render
/// as [`PivotCell::Missing`].
pub fn pivot(table: &Table, row_keys: &[&str], column_key: &str) -> RegistryResult<PivotMatrix> {
    let row_indices = row_keys
        .iter()
        .map(|name| table.column_index(name))
        .collect::<RegistryResult<Vec<_>>>()?;
    let column_index = table.column_index(column_key)?;

    let mut row_order: Vec<Vec<Value>> = Vec::new();
    let mut row_position: HashMap<Vec<Value>, usize> = HashMap::new();
    let mut column_order: Vec<Value> = Vec::new();
    let mut column_position: HashMap<Value, usize> = HashMap::new();
    let mut counts: HashMap<(usize, usize), i64> = HashMap::new();

    for row in table.rows() {
        let key: Vec<Value> = row_indices.iter().map(|&i| row[i].clone()).collect();
        let r = *row_position.entry(key.clone()).or_insert_with(|| {
            row_order.push(key);
            row_order.len() - 1
        });

        let column_value = &row[column_index];
        let c = match column_position.get(column_value) {
            Some(&c) => c,
            None => {
                column_position.insert(column_value.clone(), column_order.len());
                column_order.push(column_value.clone());
                column_order.len() - 1
            }
        };

        *counts.entry((r, c)).or_insert(0) += 1;
    }

    let mut header: Vec<String> = row_keys.iter().map(|c| c.to_string()).collect();
    header.extend(column_order.iter().map(label));

    let rows = row_order
        .into_iter()
        .enumerate()
        .map(|(r, key)| {
            let mut cells: Vec<PivotCell> = key.into_iter().map(PivotCell::Key).collect();
            cells.extend((0..column_order.len()).map(|c| match counts.get(&(r, c)) {
                Some(&n) => PivotCell::Count(n),
                None => PivotCell::Missing,
            }));
            cells
        })
        .collect();

    Ok(PivotMatrix { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relation() -> Table {
        Table::new(
            vec![
                "manufacturer".to_string(),
                "model".to_string(),
                "county".to_string(),
            ],
            vec![
                vec![
                    Value::from("Johns"),
                    Value::from("lietadlo"),
                    Value::from("001"),
                ],
                vec![
                    Value::from("Johns"),
                    Value::from("lietadlo"),
                    Value::from("001"),
                ],
                vec![
                    Value::from("Georges"),
                    Value::from("letoun"),
                    Value::from("002"),
                ],
                vec![
                    Value::from("Dicks"),
                    Value::from("samolot"),
                    Value::from("003"),
                ],
                vec![
                    Value::from("Mans"),
                    Value::from("lennuk"),
                    Value::from("999"),
                ],
            ],
        )
        .unwrap()
    }

    #[test]
    fn header_lists_columns_in_first_occurrence_order() {
        let matrix = pivot(&relation(), &["manufacturer", "model"], "county").unwrap();
        assert_eq!(
            matrix.header(),
            &["manufacturer", "model", "001", "002", "003", "999"]
        );
    }

    #[test]
    fn cells_count_exact_triples() {
        let table = relation();
        let matrix = pivot(&table, &["manufacturer", "model"], "county").unwrap();

        let mut numeric_total = 0;
        for (r, cells) in matrix.data_rows().iter().enumerate() {
            for (c, cell) in cells[2..].iter().enumerate() {
                let county = &matrix.header()[2 + c];
                let expected = table
                    .rows()
                    .iter()
                    .filter(|row| {
                        PivotCell::Key(row[0].clone()) == cells[0]
                            && PivotCell::Key(row[1].clone()) == cells[1]
                            && row[2].as_str() == Some(county)
                    })
                    .count() as i64;
                match cell {
                    PivotCell::Count(n) => {
                        assert_eq!(*n, expected);
                        numeric_total += n;
                    }
                    PivotCell::Missing => assert_eq!(expected, 0),
                    PivotCell::Key(_) => panic!("key cell past the row-key prefix in row {}", r),
                }
            }
        }
        assert_eq!(numeric_total, table.len() as i64);
    }

    #[test]
    fn serializes_header_first_with_null_sentinel() {
        let matrix = pivot(&relation(), &["manufacturer", "model"], "county").unwrap();
        let json = serde_json::to_value(&matrix).unwrap();

        assert_eq!(
            json[0],
            serde_json::json!(["manufacturer", "model", "001", "002", "003", "999"])
        );
        assert_eq!(
            json[1],
            serde_json::json!(["Johns", "lietadlo", 2, "NULL", "NULL", "NULL"])
        );
        assert_eq!(matrix.len(), 5);
    }
}
