use std::collections::BTreeMap;

use crate::datasets::table::Table;
use crate::error::{RegistryError, RegistryResult};

/// Capability interface over a collection of named tables.
///
/// The query layer only ever lists and reads datasets; how the tables were
/// populated (files, a database, test fixtures) is a backend concern.
pub trait DatasetStore: Send + Sync {
    /// Names of every dataset in the store, in listing order.
    fn list_datasets(&self) -> Vec<String>;

    /// Look up a dataset by name.
    fn get_dataset(&self, name: &str) -> RegistryResult<&Table>;
}

/// In-memory store populated from already-built tables.
///
/// Datasets iterate in name order, so listings stay deterministic across
/// backends.
#[derive(Debug, Default)]
pub struct MemoryDatasetStore {
    tables: BTreeMap<String, Table>,
}

impl MemoryDatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, table: Table) {
        self.tables.insert(name.into(), table);
    }
}

impl DatasetStore for MemoryDatasetStore {
    fn list_datasets(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    fn get_dataset(&self, name: &str) -> RegistryResult<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| RegistryError::DatasetNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::table::Value;

    #[test]
    fn list_is_name_sorted() {
        let mut store = MemoryDatasetStore::new();
        store.insert(
            "zulu",
            Table::new(vec!["a".to_string()], vec![vec![Value::from(1)]]).unwrap(),
        );
        store.insert("alpha", Table::new(vec!["a".to_string()], vec![]).unwrap());
        assert_eq!(store.list_datasets(), vec!["alpha", "zulu"]);
    }

    #[test]
    fn get_unknown_dataset_fails() {
        let store = MemoryDatasetStore::new();
        assert!(matches!(
            store.get_dataset("aircraft"),
            Err(RegistryError::DatasetNotFound(_))
        ));
    }
}
