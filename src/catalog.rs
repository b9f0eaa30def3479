// In: src/catalog.rs

//! This module defines the catalog table descriptor the bridge produces for
//! the streaming engine's catalog subsystem.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One column of a catalog table schema.
///
/// `type_descriptor` is the streaming engine's SQL type name, with
/// `" NOT NULL"` appended for non-nullable columns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogColumn {
    pub name: String,
    pub type_descriptor: String,
}

impl CatalogColumn {
    pub fn new(name: impl Into<String>, type_descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_descriptor: type_descriptor.into(),
        }
    }
}

/// The table descriptor handed to the catalog when a lakehouse table is
/// registered or opened.
///
/// Column order follows the stored schema. The comment is always empty; the
/// metadata store has no per-table comment to carry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogTable {
    pub columns: Vec<CatalogColumn>,
    pub primary_key: Vec<String>,
    pub partition_keys: Vec<String>,
    pub comment: String,
    pub properties: HashMap<String, String>,
}

impl CatalogTable {
    /// Looks up a column by name, preserving no assumption about ordering.
    pub fn column(&self, name: &str) -> Option<&CatalogColumn> {
        self.columns.iter().find(|c| c.name == name)
    }
}
