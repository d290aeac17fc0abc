//! SQLite destination store for ingested Deckbox exports.
//!
//! Builds the `cards` table definition and parameterized insert from an
//! inferred schema, then loads rows one auto-committed insert at a time.

pub mod error;
pub mod statements;
pub mod store;

pub use error::{Result, StoreError};
pub use statements::{TABLE_NAME, create_table_sql, insert_sql};
pub use store::{CardStore, RowLoader};
