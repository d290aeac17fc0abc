//! Error types for the destination store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while creating or populating the database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to open the database file.
    #[error("failed to open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The create-table statement failed.
    #[error("failed to create cards table: {source}")]
    CreateTable {
        #[source]
        source: rusqlite::Error,
    },

    /// The insert statement could not be prepared.
    #[error("failed to prepare insert statement: {source}")]
    Prepare {
        #[source]
        source: rusqlite::Error,
    },

    /// A row insert failed. Rows inserted before this one stay committed.
    #[error("failed to insert row {row}: {source}")]
    Insert {
        row: usize,
        #[source]
        source: rusqlite::Error,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
