// In: src/error.rs

//! This module defines the single, unified error type for the entire lakebridge library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// A logical type name with no entry in the target type vocabulary.
    #[error("No mapping for type name '{0}' in the target type vocabulary")]
    UnmappedType(String),

    /// A required table property is missing or unusable.
    #[error("Malformed table property '{key}': {reason}")]
    MalformedProperty { key: String, reason: &'static str },

    /// An empty key or value segment in partition-path construction.
    #[error("Partition path segment must not be empty: '{0}'")]
    InvalidPartitionSegment(String),

    /// A join was requested over zero items.
    #[error("Cannot join an empty list of {0}")]
    EmptyList(&'static str),

    /// A stored schema document that deserialized but is not a usable struct schema.
    #[error("Stored schema is not a struct schema: {0}")]
    SchemaParse(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, typically while parsing a stored schema.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error originating from the Arrow library.
    #[error("Arrow operation failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
