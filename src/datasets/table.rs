use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// A scalar cell value.
///
/// Serialized untagged, so cells round-trip as plain JSON strings, numbers
/// and nulls in dataset files and responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Str(String),
    Null,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

/// An ordered sequence of rows sharing a fixed named-column schema.
///
/// Invariant: every row has exactly `columns.len()` cells. Construction and
/// file loading enforce it; the query operations rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table, validating that every row matches the column set.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> RegistryResult<Self> {
        let table = Self { columns, rows };
        table.validate()?;
        Ok(table)
    }

    /// Construct without validation. Callers guarantee row arity.
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Check the schema invariants: unique column names, uniform row arity.
    pub fn validate(&self) -> RegistryResult<()> {
        for (i, name) in self.columns.iter().enumerate() {
            if self.columns[..i].contains(name) {
                return Err(RegistryError::MalformedRow(format!(
                    "duplicate column `{}`",
                    name
                )));
            }
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(RegistryError::MalformedRow(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    self.columns.len()
                )));
            }
        }
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column, or `MalformedRow` when absent.
    pub fn column_index(&self, name: &str) -> RegistryResult<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| RegistryError::MalformedRow(format!("missing column `{}`", name)))
    }
}
