//! Grouping aggregates: the flat group-and-count relation and the recursive
//! nested tree built over the same grouping columns.

use std::collections::HashMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::datasets::{Table, Value};
use crate::error::RegistryResult;

/// Name of the cardinality column appended by [`group_and_count`].
pub const COUNT_COLUMN: &str = "count";

/// Group rows by the tuple of values in `group_columns` and emit one row per
/// distinct key with an appended `count` column.
///
/// Order-preserving: output rows follow the first-occurrence order of each
/// key tuple scanning the input top to bottom, never a sort.
pub fn group_and_count(table: &Table, group_columns: &[&str]) -> RegistryResult<Table> {
    let indices = group_columns
        .iter()
        .map(|name| table.column_index(name))
        .collect::<RegistryResult<Vec<_>>>()?;

    let mut position: HashMap<Vec<Value>, usize> = HashMap::new();
    let mut keys: Vec<Vec<Value>> = Vec::new();
    let mut counts: Vec<i64> = Vec::new();

    for row in table.rows() {
        let key: Vec<Value> = indices.iter().map(|&i| row[i].clone()).collect();
        match position.get(&key) {
            Some(&at) => counts[at] += 1,
            None => {
                position.insert(key.clone(), keys.len());
                keys.push(key);
                counts.push(1);
            }
        }
    }

    let mut columns: Vec<String> = group_columns.iter().map(|c| c.to_string()).collect();
    columns.push(COUNT_COLUMN.to_string());

    let rows = keys
        .into_iter()
        .zip(counts)
        .map(|(mut key, count)| {
            key.push(Value::Int(count));
            key
        })
        .collect();

    Ok(Table::from_parts(columns, rows))
}

/// One level of a nested aggregate: a grouping key and its subtree.
///
/// Serializes as `{"<column>": key, "agg": <subtree or count>}`, the wire
/// shape consumed by the nested-aggregate endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateNode {
    pub column: String,
    pub key: Value,
    pub agg: AggregateValue,
}

/// A subtree: either further grouping levels or a terminal row count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AggregateValue {
    Count(i64),
    Groups(Vec<AggregateNode>),
}

/// Nested aggregate over an ordered list of grouping dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregateTree {
    entries: Vec<AggregateNode>,
}

impl AggregateTree {
    pub fn entries(&self) -> &[AggregateNode] {
        &self.entries
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every leaf count in the tree.
    pub fn leaf_total(&self) -> i64 {
        fn total(nodes: &[AggregateNode]) -> i64 {
            nodes
                .iter()
                .map(|node| match &node.agg {
                    AggregateValue::Count(n) => *n,
                    AggregateValue::Groups(children) => total(children),
                })
                .sum()
        }
        total(&self.entries)
    }
}

impl Serialize for AggregateNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&self.column, &self.key)?;
        map.serialize_entry("agg", &self.agg)?;
        map.end()
    }
}

/// Recursively partition `table` by `group_columns`, in order.
///
/// Each level lists its distinct keys in first-occurrence order; the
/// terminal level always carries the row count of its group. Leaves are
/// counts computed here, never values unwrapped from the input, so a
/// singleton group yields the count `1` rather than a nested list of one.
pub fn nest(table: &Table, group_columns: &[&str]) -> RegistryResult<AggregateTree> {
    let resolved = group_columns
        .iter()
        .map(|&name| Ok((name, table.column_index(name)?)))
        .collect::<RegistryResult<Vec<_>>>()?;

    let rows: Vec<&Vec<Value>> = table.rows().iter().collect();
    Ok(AggregateTree {
        entries: nest_level(&rows, &resolved),
    })
}

fn nest_level(rows: &[&Vec<Value>], columns: &[(&str, usize)]) -> Vec<AggregateNode> {
    let Some(&(name, idx)) = columns.first() else {
        return Vec::new();
    };

    let mut order: Vec<&Value> = Vec::new();
    let mut groups: HashMap<&Value, Vec<&Vec<Value>>> = HashMap::new();
    for &row in rows {
        let key = &row[idx];
        if !groups.contains_key(key) {
            order.push(key);
        }
        groups.entry(key).or_default().push(row);
    }

    order
        .into_iter()
        .map(|key| {
            let group = &groups[key];
            let agg = if columns.len() == 1 {
                AggregateValue::Count(group.len() as i64)
            } else {
                AggregateValue::Groups(nest_level(group, &columns[1..]))
            };
            AggregateNode {
                column: name.to_string(),
                key: key.clone(),
                agg,
            }
        })
        .collect()
}
