use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::app::column_sizes::ColumnSizes;
use crate::app::ports::column_size_store::{ColumnSizeStore, ColumnSizeStoreError};

const STORE_FILE_NAME: &str = "column_sizes.json";

type StoredTables = BTreeMap<String, ColumnSizes>;

/// Keeps every table's column sizes in one JSON document.
pub struct JsonColumnSizeStore {
    config_dir: PathBuf,
}

impl JsonColumnSizeStore {
    pub fn new() -> Result<Self, ColumnSizeStoreError> {
        let config_dir = get_config_dir()?;
        Ok(Self { config_dir })
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    fn store_file_path(&self) -> PathBuf {
        self.config_dir.join(STORE_FILE_NAME)
    }

    fn read_all(&self) -> Result<StoredTables, ColumnSizeStoreError> {
        let path = self.store_file_path();
        if !path.exists() {
            return Ok(StoredTables::new());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| ColumnSizeStoreError::ReadError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ColumnSizeStoreError::InvalidFormat(e.to_string()))
    }
}

impl ColumnSizeStore for JsonColumnSizeStore {
    fn load(&self, table: &str) -> Result<ColumnSizes, ColumnSizeStoreError> {
        let mut tables = self.read_all()?;
        Ok(tables.remove(table).unwrap_or_default())
    }

    fn save(&self, table: &str, sizes: &ColumnSizes) -> Result<(), ColumnSizeStoreError> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)
                .map_err(|e| ColumnSizeStoreError::IoError(e.to_string()))?;
        }

        let mut tables = self.read_all()?;
        tables.insert(table.to_string(), sizes.clone());

        let content = serde_json::to_string_pretty(&tables)
            .map_err(|e| ColumnSizeStoreError::WriteError(e.to_string()))?;
        let path = self.store_file_path();
        fs::write(&path, content).map_err(|e| ColumnSizeStoreError::WriteError(e.to_string()))?;

        debug!(table, columns = sizes.len(), path = %path.display(), "saved column sizes");
        Ok(())
    }

    fn storage_path(&self) -> PathBuf {
        self.store_file_path()
    }
}

fn get_config_dir() -> Result<PathBuf, ColumnSizeStoreError> {
    let config_base = dirs::config_dir()
        .ok_or_else(|| ColumnSizeStoreError::IoError("Could not find config directory".into()))?;
    Ok(config_base.join("fleetdeck"))
}
