//! This module defines the core, strongly-typed data representations used
//! throughout the lakebridge conversion layer.
//!
//! It holds the two fixed type vocabularies the bridge translates between:
//! the streaming engine's SQL-style logical types (`StreamDataType`) and the
//! columnar engine's primitive types (`ColumnarDataType`). Both replace
//! fragile string comparisons with exhaustively-matched enums, so an
//! unmapped type name is a construction-time error rather than a silent
//! mistranslation.

pub mod columnar_type;
pub mod stream_type;

// Re-export the main types for easier access.
pub use columnar_type::ColumnarDataType;
pub use stream_type::{StreamDataType, StreamField, StreamSchema};
