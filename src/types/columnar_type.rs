//! This module defines the columnar engine side of the bridge's type system,
//! together with the exhaustive conversion tables connecting it to the
//! streaming vocabulary and to Arrow.

use std::fmt;
use std::str::FromStr;

use arrow::datatypes::{DataType as ArrowDataType, TimeUnit};
use serde::{Deserialize, Serialize};

use crate::error::BridgeError;
use crate::types::StreamDataType;

/// A primitive column type in the columnar engine's vocabulary.
///
/// The serde names are the lowercase type names the engine persists inside
/// stored struct-schema JSON (`"integer"`, `"long"`, ...), so a stored field
/// deserializes straight into this enum and an unknown name fails at parse
/// time rather than surfacing as a bad string later.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColumnarDataType {
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    String,
    Binary,
    Date,
    Timestamp,
}

impl ColumnarDataType {
    /// The persisted (lowercase) type name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Binary => "binary",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
        }
    }

    /// Converts a `ColumnarDataType` into an Arrow `DataType`.
    ///
    /// Timestamps are microsecond precision without a zone; dates are
    /// `Date32`. Both choices match what the columnar engine materializes.
    pub fn to_arrow_type(&self) -> ArrowDataType {
        match self {
            Self::Byte => ArrowDataType::Int8,
            Self::Short => ArrowDataType::Int16,
            Self::Integer => ArrowDataType::Int32,
            Self::Long => ArrowDataType::Int64,
            Self::Float => ArrowDataType::Float32,
            Self::Double => ArrowDataType::Float64,
            Self::Boolean => ArrowDataType::Boolean,
            Self::String => ArrowDataType::Utf8,
            Self::Binary => ArrowDataType::Binary,
            Self::Date => ArrowDataType::Date32,
            Self::Timestamp => ArrowDataType::Timestamp(TimeUnit::Microsecond, None),
        }
    }

    /// Converts an Arrow `DataType` back into a `ColumnarDataType`.
    pub fn from_arrow_type(arrow_type: &ArrowDataType) -> Result<Self, BridgeError> {
        match arrow_type {
            ArrowDataType::Int8 => Ok(Self::Byte),
            ArrowDataType::Int16 => Ok(Self::Short),
            ArrowDataType::Int32 => Ok(Self::Integer),
            ArrowDataType::Int64 => Ok(Self::Long),
            ArrowDataType::Float32 => Ok(Self::Float),
            ArrowDataType::Float64 => Ok(Self::Double),
            ArrowDataType::Boolean => Ok(Self::Boolean),
            ArrowDataType::Utf8 | ArrowDataType::LargeUtf8 => Ok(Self::String),
            ArrowDataType::Binary | ArrowDataType::LargeBinary => Ok(Self::Binary),
            ArrowDataType::Date32 => Ok(Self::Date),
            ArrowDataType::Timestamp(_, _) => Ok(Self::Timestamp),
            dt => Err(BridgeError::UnmappedType(format!("{dt:?}"))),
        }
    }
}

impl FromStr for ColumnarDataType {
    type Err = BridgeError;

    /// Parses a persisted columnar type name. Case-insensitive.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "byte" => Ok(Self::Byte),
            "short" => Ok(Self::Short),
            "integer" => Ok(Self::Integer),
            "long" => Ok(Self::Long),
            "float" => Ok(Self::Float),
            "double" => Ok(Self::Double),
            "boolean" => Ok(Self::Boolean),
            "string" => Ok(Self::String),
            "binary" => Ok(Self::Binary),
            "date" => Ok(Self::Date),
            "timestamp" => Ok(Self::Timestamp),
            other => Err(BridgeError::UnmappedType(other.to_string())),
        }
    }
}

impl fmt::Display for ColumnarDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//==================================================================================
// Cross-Vocabulary Conversion
//==================================================================================
// The two vocabularies are the same size by construction, so conversion is
// total in both directions and the round trip is the identity.

impl From<StreamDataType> for ColumnarDataType {
    fn from(stream: StreamDataType) -> Self {
        match stream {
            StreamDataType::TinyInt => Self::Byte,
            StreamDataType::SmallInt => Self::Short,
            StreamDataType::Int => Self::Integer,
            StreamDataType::BigInt => Self::Long,
            StreamDataType::Float => Self::Float,
            StreamDataType::Double => Self::Double,
            StreamDataType::Boolean => Self::Boolean,
            StreamDataType::String => Self::String,
            StreamDataType::Bytes => Self::Binary,
            StreamDataType::Date => Self::Date,
            StreamDataType::Timestamp => Self::Timestamp,
        }
    }
}

impl From<ColumnarDataType> for StreamDataType {
    fn from(columnar: ColumnarDataType) -> Self {
        match columnar {
            ColumnarDataType::Byte => Self::TinyInt,
            ColumnarDataType::Short => Self::SmallInt,
            ColumnarDataType::Integer => Self::Int,
            ColumnarDataType::Long => Self::BigInt,
            ColumnarDataType::Float => Self::Float,
            ColumnarDataType::Double => Self::Double,
            ColumnarDataType::Boolean => Self::Boolean,
            ColumnarDataType::String => Self::String,
            ColumnarDataType::Binary => Self::Bytes,
            ColumnarDataType::Date => Self::Date,
            ColumnarDataType::Timestamp => Self::Timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ColumnarDataType; 11] = [
        ColumnarDataType::Byte,
        ColumnarDataType::Short,
        ColumnarDataType::Integer,
        ColumnarDataType::Long,
        ColumnarDataType::Float,
        ColumnarDataType::Double,
        ColumnarDataType::Boolean,
        ColumnarDataType::String,
        ColumnarDataType::Binary,
        ColumnarDataType::Date,
        ColumnarDataType::Timestamp,
    ];

    #[test]
    fn arrow_round_trip_is_identity() {
        for dt in ALL {
            let back = ColumnarDataType::from_arrow_type(&dt.to_arrow_type()).unwrap();
            assert_eq!(back, dt);
        }
    }

    #[test]
    fn stream_round_trip_is_identity() {
        for dt in ALL {
            let back = ColumnarDataType::from(StreamDataType::from(dt));
            assert_eq!(back, dt);
        }
    }

    #[test]
    fn parse_matches_persisted_names() {
        for dt in ALL {
            assert_eq!(dt.name().parse::<ColumnarDataType>().unwrap(), dt);
        }
        assert_eq!(
            "Integer".parse::<ColumnarDataType>().unwrap(),
            ColumnarDataType::Integer
        );
    }

    #[test]
    fn serde_names_are_the_persisted_names() {
        let json = serde_json::to_string(&ColumnarDataType::Long).unwrap();
        assert_eq!(json, "\"long\"");
        let back: ColumnarDataType = serde_json::from_str("\"timestamp\"").unwrap();
        assert_eq!(back, ColumnarDataType::Timestamp);
    }

    #[test]
    fn unmapped_arrow_type_is_an_error() {
        let err = ColumnarDataType::from_arrow_type(&ArrowDataType::UInt64).unwrap_err();
        assert!(matches!(err, BridgeError::UnmappedType(_)));
        assert!(err.to_string().contains("UInt64"));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "decimal".parse::<ColumnarDataType>().unwrap_err();
        assert!(err.to_string().contains("decimal"));
    }
}
