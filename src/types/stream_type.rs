//! This module defines the streaming engine side of the bridge's type system:
//! the logical types a table column can carry, and the field-list schema
//! shape the engine hands to the connector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// A logical column type in the streaming engine's vocabulary.
///
/// The member set is fixed to the primitives both connected engines support;
/// anything outside it is rejected when a name is parsed, never at use time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum StreamDataType {
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Boolean,
    String,
    Bytes,
    Date,
    Timestamp,
}

impl StreamDataType {
    /// The SQL type name used in catalog type descriptors.
    pub fn sql_name(&self) -> &'static str {
        match self {
            Self::TinyInt => "TINYINT",
            Self::SmallInt => "SMALLINT",
            Self::Int => "INT",
            Self::BigInt => "BIGINT",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Bytes => "BYTES",
            Self::Date => "DATE",
            Self::Timestamp => "TIMESTAMP",
        }
    }
}

impl FromStr for StreamDataType {
    type Err = BridgeError;

    /// Parses a streaming-engine type name. Case-insensitive, and accepts
    /// the common aliases the engine prints for the same logical type.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_uppercase().as_str() {
            "TINYINT" => Ok(Self::TinyInt),
            "SMALLINT" => Ok(Self::SmallInt),
            "INT" | "INTEGER" => Ok(Self::Int),
            "BIGINT" => Ok(Self::BigInt),
            "FLOAT" => Ok(Self::Float),
            "DOUBLE" => Ok(Self::Double),
            "BOOLEAN" => Ok(Self::Boolean),
            "STRING" | "VARCHAR" | "CHAR" => Ok(Self::String),
            "BYTES" | "BINARY" | "VARBINARY" => Ok(Self::Bytes),
            "DATE" => Ok(Self::Date),
            "TIMESTAMP" | "TIMESTAMP_WITHOUT_TIME_ZONE" => Ok(Self::Timestamp),
            other => Err(BridgeError::UnmappedType(other.to_string())),
        }
    }
}

/// Renders the canonical SQL name, matching what catalog descriptors carry.
impl fmt::Display for StreamDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

/// One column of a streaming-engine table schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StreamField {
    pub name: String,
    pub data_type: StreamDataType,
    pub nullable: bool,
}

impl StreamField {
    pub fn new(name: impl Into<String>, data_type: StreamDataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }
}

/// An ordered field-list schema as the streaming engine presents it.
///
/// The bridge treats this as read-only input: conversions walk the fields in
/// order and build fresh outputs, never mutating the schema itself.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamSchema {
    pub fields: Vec<StreamField>,
}

impl StreamSchema {
    pub fn new(fields: Vec<StreamField>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        assert_eq!("INT".parse::<StreamDataType>().unwrap(), StreamDataType::Int);
        assert_eq!(
            "BIGINT".parse::<StreamDataType>().unwrap(),
            StreamDataType::BigInt
        );
        assert_eq!(
            "STRING".parse::<StreamDataType>().unwrap(),
            StreamDataType::String
        );
        assert_eq!(
            "TIMESTAMP".parse::<StreamDataType>().unwrap(),
            StreamDataType::Timestamp
        );
    }

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!(
            "integer".parse::<StreamDataType>().unwrap(),
            StreamDataType::Int
        );
        assert_eq!(
            "Varchar".parse::<StreamDataType>().unwrap(),
            StreamDataType::String
        );
        assert_eq!(
            "TIMESTAMP_WITHOUT_TIME_ZONE".parse::<StreamDataType>().unwrap(),
            StreamDataType::Timestamp
        );
    }

    #[test]
    fn unknown_name_is_an_unmapped_type_error() {
        let err = "INTERVAL".parse::<StreamDataType>().unwrap_err();
        assert!(err.to_string().contains("INTERVAL"));
    }

    #[test]
    fn display_matches_sql_name() {
        assert_eq!(StreamDataType::TinyInt.to_string(), "TINYINT");
        assert_eq!(StreamDataType::Bytes.to_string(), "BYTES");
    }
}
