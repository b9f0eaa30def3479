// In: src/bridge/columnar_schema.rs

//! Converts streaming field-list schemas to and from Arrow schemas.

use arrow::datatypes::{Field, Schema};

use crate::error::BridgeError;
use crate::types::{ColumnarDataType, StreamField, StreamSchema};

/// Maps a streaming schema onto the columnar engine's Arrow representation.
///
/// Append-only: field count, order, and nullability are preserved exactly.
/// CDC-column filtering happens only on the catalog side, never here.
///
/// `is_cdc` is accepted for interface parity with the catalog conversion but
/// is deliberately unread. Whether a CDC table's change column should also
/// be filtered at this layer is unresolved; integrators must decide in the
/// surrounding system before wiring the flag up.
pub fn to_columnar_schema(schema: &StreamSchema, is_cdc: bool) -> Schema {
    let _ = is_cdc;
    let fields: Vec<Field> = schema
        .fields
        .iter()
        .map(|f| {
            let columnar = ColumnarDataType::from(f.data_type);
            Field::new(&f.name, columnar.to_arrow_type(), f.nullable)
        })
        .collect();
    Schema::new(fields)
}

/// Maps an Arrow schema back into the streaming vocabulary.
///
/// Fails with `UnmappedType` for any Arrow type outside the fixed columnar
/// vocabulary.
pub fn from_columnar_schema(schema: &Schema) -> Result<StreamSchema, BridgeError> {
    let fields = schema
        .fields()
        .iter()
        .map(|f| {
            let columnar = ColumnarDataType::from_arrow_type(f.data_type())?;
            Ok(StreamField::new(
                f.name().clone(),
                columnar.into(),
                f.is_nullable(),
            ))
        })
        .collect::<Result<Vec<_>, BridgeError>>()?;
    Ok(StreamSchema::new(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{DataType, TimeUnit};
    use crate::types::StreamDataType;

    fn sample_schema() -> StreamSchema {
        StreamSchema::new(vec![
            StreamField::new("id", StreamDataType::BigInt, false),
            StreamField::new("name", StreamDataType::String, true),
            StreamField::new("ts", StreamDataType::Timestamp, false),
            StreamField::new("blob", StreamDataType::Bytes, true),
        ])
    }

    #[test]
    fn preserves_count_order_and_nullability() {
        let arrow_schema = to_columnar_schema(&sample_schema(), false);
        assert_eq!(arrow_schema.fields().len(), 4);
        assert_eq!(arrow_schema.field(0).name(), "id");
        assert_eq!(*arrow_schema.field(0).data_type(), DataType::Int64);
        assert!(!arrow_schema.field(0).is_nullable());
        assert_eq!(*arrow_schema.field(1).data_type(), DataType::Utf8);
        assert!(arrow_schema.field(1).is_nullable());
        assert_eq!(
            *arrow_schema.field(2).data_type(),
            DataType::Timestamp(TimeUnit::Microsecond, None)
        );
        assert_eq!(*arrow_schema.field(3).data_type(), DataType::Binary);
    }

    #[test]
    fn cdc_flag_does_not_filter_anything() {
        let without = to_columnar_schema(&sample_schema(), false);
        let with = to_columnar_schema(&sample_schema(), true);
        assert_eq!(without, with);
    }

    #[test]
    fn round_trip_is_identity() {
        let original = sample_schema();
        let arrow_schema = to_columnar_schema(&original, false);
        let back = from_columnar_schema(&arrow_schema).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn empty_schema_stays_empty() {
        let arrow_schema = to_columnar_schema(&StreamSchema::default(), false);
        assert_eq!(arrow_schema.fields().len(), 0);
    }

    #[test]
    fn unmapped_arrow_type_fails() {
        let arrow_schema = Schema::new(vec![Field::new("x", DataType::UInt32, true)]);
        let err = from_columnar_schema(&arrow_schema).unwrap_err();
        assert!(matches!(err, BridgeError::UnmappedType(_)));
    }
}
