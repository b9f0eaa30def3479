// In: src/config.rs

//! The single source of truth for the table properties and delimiters the
//! bridge recognizes.
//!
//! The bridge itself is stateless, so there is no runtime configuration
//! object: its only knobs are the well-known keys it looks up in a table's
//! persisted property map, and the fixed delimiters of the persisted
//! partition-key and record-key strings. Both are defined here so that the
//! connector layer and the conversion code agree on a single spelling.

use std::collections::HashMap;

//==================================================================================
// I. Recognized Property Keys & Delimiters
//==================================================================================

/// Property key naming the CDC change column of a table. When set to a
/// non-empty column name, that column is elided from catalog-facing schemas.
pub const CDC_CHANGE_COLUMN: &str = "lakebridge_cdc_change_column";

/// Property key holding the record key (primary key) of a table, as a
/// comma-separated column list.
pub const RECORD_KEY_NAME: &str = "record_key";

/// Separator between partition-key column names in persisted table metadata.
pub const PARTITION_KEY_SEPARATOR: char = ';';

/// Separator between record-key column names in the record-key property.
pub const RECORD_KEY_SEPARATOR: char = ',';

/// Suffix appended to a catalog type descriptor for non-nullable columns.
pub const NOT_NULL: &str = " NOT NULL";

//==================================================================================
// II. Property Accessors
//==================================================================================

/// Returns the configured CDC change column, treating an empty value the
/// same as an absent one.
pub fn cdc_change_column(properties: &HashMap<String, String>) -> Option<&str> {
    properties
        .get(CDC_CHANGE_COLUMN)
        .map(String::as_str)
        .filter(|name| !name.is_empty())
}

/// Reports whether the table behind `options` is a CDC table.
///
/// Placeholder: always returns `false`. Real CDC detection has to be
/// supplied by the surrounding system; see `DESIGN.md`.
pub fn is_cdc_enabled(options: &HashMap<String, String>) -> bool {
    let _ = options;
    log::debug!("is_cdc_enabled is a placeholder and always reports false");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdc_change_column_ignores_empty_value() {
        let mut props = HashMap::new();
        assert_eq!(cdc_change_column(&props), None);

        props.insert(CDC_CHANGE_COLUMN.to_string(), "".to_string());
        assert_eq!(cdc_change_column(&props), None);

        props.insert(CDC_CHANGE_COLUMN.to_string(), "op".to_string());
        assert_eq!(cdc_change_column(&props), Some("op"));
    }

    #[test]
    fn is_cdc_enabled_is_a_stub() {
        let mut options = HashMap::new();
        options.insert("use_cdc".to_string(), "true".to_string());
        assert!(!is_cdc_enabled(&options));
        assert!(!is_cdc_enabled(&HashMap::new()));
    }
}
