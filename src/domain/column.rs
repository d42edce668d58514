use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a device attribute shown as a table column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnAttribute {
    pub name: String,
    pub scope: String,
}

impl ColumnAttribute {
    pub fn new(name: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: scope.into(),
        }
    }

    /// Key used when persisting per-column preferences.
    pub fn key(&self) -> String {
        format!("{}:{}", self.scope, self.name)
    }
}

impl fmt::Display for ColumnAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.scope)
    }
}

/// A resizable column descriptor. The attribute is opaque to the resize
/// calculation and only carried through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeader<A = ColumnAttribute> {
    pub attribute: A,
}

impl<A> ColumnHeader<A> {
    pub fn new(attribute: A) -> Self {
        Self { attribute }
    }
}

/// A column with the width assigned by a resize pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizedColumn<A = ColumnAttribute> {
    pub attribute: A,
    pub size: f64,
}
