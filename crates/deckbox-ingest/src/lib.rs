//! Deckbox export ingestion.
//!
//! Reads a Deckbox inventory export (comma-separated, single header row),
//! infers a column schema from the headers, and streams data rows with
//! numeric fields normalized for loading into the destination store.

pub mod error;
pub mod normalize;
pub mod reader;
pub mod schema;

pub use error::{IngestError, Result};
pub use normalize::scrub_numeric;
pub use reader::{ExportReader, Records};
pub use schema::{Column, ColumnType, TableSchema, normalize_key, type_for_key};
