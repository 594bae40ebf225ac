//! Record codec for Tessera.
//!
//! This crate provides:
//! - Ordered column schemas with precomputed static offsets
//! - The `RecordSource` capability used to read records being written
//! - `DirectRecord`, which encodes records into a paged arena and decodes
//!   individual columns back from a record offset
//! - Lazy binary payload streams

mod record;
mod schema;
mod source;
mod stream;

pub use record::{DirectRecord, LENGTH_PREFIX_SIZE, NULL_LENGTH};
pub use schema::{ColumnMeta, RecordSchema, RecordSchemaBuilder};
pub use source::{ColumnValue, RecordSource, Row};
pub use stream::BinaryStream;
