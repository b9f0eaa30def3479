//! This file is the root of the `lakebridge` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`bridge`, `types`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the small public surface that connector code is expected
//!     to reach for directly.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metadata;
pub mod types;
pub mod utils;

//==================================================================================
// 2. Public Surface
//==================================================================================
pub use bridge::{
    format_partition_path, from_columnar_schema, row_kind_to_operation, to_catalog_table,
    to_columnar_schema, OperationTag, PartitionSpec, RowKind,
};
pub use catalog::{CatalogColumn, CatalogTable};
pub use error::BridgeError;
pub use metadata::{StoredField, StoredSchema, TableMetadata};
pub use types::{ColumnarDataType, StreamDataType, StreamField, StreamSchema};
