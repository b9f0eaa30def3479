// In: src/bridge/catalog_schema.rs

//! Builds catalog table descriptors from persisted table metadata.

use crate::catalog::{CatalogColumn, CatalogTable};
use crate::config;
use crate::error::BridgeError;
use crate::metadata::TableMetadata;
use crate::types::StreamDataType;

/// Converts a persisted metadata record into the descriptor the streaming
/// engine's catalog consumes.
///
/// The stored struct schema is walked in order. The configured CDC change
/// column, when the property is set to a non-empty name, is elided; every
/// other field is rewritten into the streaming SQL vocabulary, with
/// `" NOT NULL"` appended for non-nullable fields. The primary key comes
/// from the record-key property, which must be present and non-empty.
pub fn to_catalog_table(meta: &TableMetadata) -> Result<CatalogTable, BridgeError> {
    let stored = meta.parse_schema()?;
    let cdc_column = config::cdc_change_column(&meta.properties);

    let mut columns = Vec::with_capacity(stored.fields.len());
    for field in &stored.fields {
        if cdc_column == Some(field.name.as_str()) {
            log::debug!(
                "eliding CDC change column '{}' from catalog schema of table '{}'",
                field.name,
                meta.table_name
            );
            continue;
        }
        let stream_type = StreamDataType::from(field.data_type);
        let mut descriptor = stream_type.sql_name().to_string();
        if !field.nullable {
            descriptor.push_str(config::NOT_NULL);
        }
        columns.push(CatalogColumn::new(field.name.clone(), descriptor));
    }

    let primary_key = parse_record_key(meta)?;
    let partition_keys = meta.partition_keys();

    Ok(CatalogTable {
        columns,
        primary_key,
        partition_keys,
        comment: String::new(),
        properties: meta.properties.clone(),
    })
}

/// Splits the record-key property into the primary-key column list.
///
/// A missing or empty property is a checked `MalformedProperty` error; a
/// table without a record key cannot be registered with a primary key.
fn parse_record_key(meta: &TableMetadata) -> Result<Vec<String>, BridgeError> {
    let record_key = meta
        .properties
        .get(config::RECORD_KEY_NAME)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| BridgeError::MalformedProperty {
            key: config::RECORD_KEY_NAME.to_string(),
            reason: "record key must be a non-empty, comma-separated column list",
        })?;
    Ok(record_key
        .split(config::RECORD_KEY_SEPARATOR)
        .map(str::to_string)
        .collect())
}
