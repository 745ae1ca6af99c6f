use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;

use crate::datasets::store::DatasetStore;
use crate::datasets::table::Table;
use crate::error::{RegistryError, RegistryResult};

/// File-backed dataset store.
///
/// Loads every `*.json` file in a data directory at startup; the file stem
/// becomes the dataset name. Each file holds one table as a
/// `{"columns": [...], "rows": [[...], ...]}` document. Loading happens once,
/// before any query runs; the store is immutable afterwards.
#[derive(Debug)]
pub struct FileDatasetStore {
    tables: BTreeMap<String, Table>,
}

impl FileDatasetStore {
    /// Load all dataset files from `data_dir`.
    ///
    /// Non-files and files without a `.json` extension are skipped. A file
    /// that parses but violates the table invariants is an error, not a
    /// skipped dataset.
    pub fn load(data_dir: &Path) -> RegistryResult<Self> {
        let mut tables = BTreeMap::new();

        for entry in fs::read_dir(data_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| {
                    RegistryError::Config(format!("invalid dataset file name: {}", path.display()))
                })?
                .to_string();

            let raw = fs::read_to_string(&path)?;
            let table: Table = serde_json::from_str(&raw).map_err(|e| {
                RegistryError::Serialization(format!("{}: {}", path.display(), e))
            })?;
            table.validate()?;

            info!(
                "Loaded dataset '{}' ({} rows, {} columns)",
                name,
                table.len(),
                table.columns().len()
            );
            tables.insert(name, table);
        }

        Ok(Self { tables })
    }
}

impl DatasetStore for FileDatasetStore {
    fn list_datasets(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    fn get_dataset(&self, name: &str) -> RegistryResult<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| RegistryError::DatasetNotFound(name.to_string()))
    }
}
