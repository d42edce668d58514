use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::app::column_resize::ResizeOutcome;
use crate::domain::{ColumnAttribute, ColumnHeader};

/// User-chosen column widths of one table, keyed by attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSizes {
    sizes: BTreeMap<String, f64>,
}

impl ColumnSizes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, attribute: &ColumnAttribute) -> Option<f64> {
        self.sizes.get(&attribute.key()).copied()
    }

    pub fn set(&mut self, attribute: &ColumnAttribute, size: f64) {
        self.sizes.insert(attribute.key(), size);
    }

    /// Stores every size of a resize pass.
    pub fn apply(&mut self, outcome: &ResizeOutcome<ColumnAttribute>) {
        for column in &outcome.columns {
            self.set(&column.attribute, column.size);
        }
    }

    /// Width to render each header at: the stored size, else `fallback`.
    pub fn widths_for(&self, headers: &[ColumnHeader], fallback: f64) -> Vec<f64> {
        headers
            .iter()
            .map(|h| self.get(&h.attribute).unwrap_or(fallback))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
