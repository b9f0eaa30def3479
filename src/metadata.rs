// In: src/metadata.rs

//! This module defines the persisted table metadata record the bridge reads
//! and the stored struct-schema JSON embedded inside it.
//!
//! The metadata record is written by the lakehouse metadata store and handed
//! to the bridge as-is. The bridge only interprets three parts of it: the
//! serialized struct schema, the `;`-delimited partition-key string, and the
//! recognized entries of the property map. Everything else is carried
//! through untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::BridgeError;
use crate::types::ColumnarDataType;

//==================================================================================
// I. Stored Struct Schema
//==================================================================================

/// One field of a stored struct schema.
///
/// `nullable` defaults to `true` when absent, matching what the columnar
/// engine emits for fields it never marked.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredField {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: ColumnarDataType,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
}

fn default_nullable() -> bool {
    true
}

impl StoredField {
    pub fn new(name: impl Into<String>, data_type: ColumnarDataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }
}

/// The stored struct-schema document: `{"type":"struct","fields":[...]}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredSchema {
    #[serde(rename = "type", default = "struct_tag")]
    pub kind: String,
    #[serde(default)]
    pub fields: Vec<StoredField>,
}

fn struct_tag() -> String {
    "struct".to_string()
}

impl StoredSchema {
    pub fn new(fields: Vec<StoredField>) -> Self {
        Self {
            kind: struct_tag(),
            fields,
        }
    }

    /// Parses a stored schema from its serialized JSON form.
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        let schema: StoredSchema = serde_json::from_str(json)?;
        if schema.kind != "struct" {
            return Err(BridgeError::SchemaParse(format!(
                "expected type 'struct', found '{}'",
                schema.kind
            )));
        }
        Ok(schema)
    }

    pub fn to_json(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(self)?)
    }
}

//==================================================================================
// II. Table Metadata Record
//==================================================================================

/// The persisted metadata record describing one lakehouse table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TableMetadata {
    pub table_id: String,
    pub table_name: String,
    pub table_path: String,
    /// Serialized [`StoredSchema`] JSON.
    pub table_schema: String,
    /// `;`-delimited partition-key column names. May be empty.
    #[serde(default)]
    pub partitions: String,
    /// Free-form properties, including the recognized keys in [`crate::config`].
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl TableMetadata {
    /// Deserializes the embedded struct schema.
    pub fn parse_schema(&self) -> Result<StoredSchema, BridgeError> {
        StoredSchema::from_json(&self.table_schema)
    }

    /// Splits the partition string into an ordered column-name list.
    ///
    /// An empty partition string means an unpartitioned table and yields an
    /// empty list rather than a single empty name.
    pub fn partition_keys(&self) -> Vec<String> {
        self.partitions
            .split(config::PARTITION_KEY_SEPARATOR)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect()
    }
}
