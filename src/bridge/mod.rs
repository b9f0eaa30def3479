// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the conversion surface of the lakebridge library. It sits
// between the streaming engine's schema model and the columnar engine's
// schema model and owns every translation the connector needs:
//
//   1. [Catalog direction (catalog_schema)]
//         persisted TableMetadata -> CatalogTable descriptor
//         (stored columnar JSON parsed, CDC column elided, type names
//          rewritten into the streaming SQL vocabulary)
//
//   2. [Columnar direction (columnar_schema)]
//         StreamSchema -> Arrow Schema, and the inverse
//         (exhaustive per-field type mapping, nullability preserved)
//
//   3. [Row-change markers (row_kind)]
//         "+I"/"-U"/"+U"/"-D" -> insert/update/delete operation tags
//
//   4. [Partition paths (partition)]
//         ordered PartitionSpec -> "k1=v1,k2=v2" path suffix
//
// Every operation is a pure, one-shot transform over immutable inputs: no
// shared state, no I/O, safe to call from any number of threads.
// ====================================================================================
pub mod catalog_schema;
pub mod columnar_schema;
pub mod partition;
pub mod row_kind;

pub use catalog_schema::to_catalog_table;
pub use columnar_schema::{from_columnar_schema, to_columnar_schema};
pub use partition::{format_partition_path, partition_desc_value, PartitionSpec};
pub use row_kind::{row_kind_to_operation, OperationTag, RowKind};
