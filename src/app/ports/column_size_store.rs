use std::path::PathBuf;

use thiserror::Error;

use crate::app::column_sizes::ColumnSizes;

#[derive(Debug, Error)]
pub enum ColumnSizeStoreError {
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("IO error: {0}")]
    IoError(String),
}

/// Persistence for column widths the user dragged into place.
pub trait ColumnSizeStore: Send + Sync {
    /// Sizes saved for `table`; empty when nothing was saved yet.
    fn load(&self, table: &str) -> Result<ColumnSizes, ColumnSizeStoreError>;

    fn save(&self, table: &str, sizes: &ColumnSizes) -> Result<(), ColumnSizeStoreError>;

    fn storage_path(&self) -> PathBuf;
}
