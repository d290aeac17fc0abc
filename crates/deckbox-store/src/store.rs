//! SQLite destination store.
//!
//! The connection is exclusively owned for the process lifetime and
//! released when the store is dropped. Each insert runs as its own
//! implicit transaction; a failure mid-load leaves earlier rows
//! committed.

use std::path::Path;

use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{Connection, Statement, params_from_iter};
use tracing::{debug, info};

use deckbox_ingest::TableSchema;

use crate::error::{Result, StoreError};
use crate::statements::{create_table_sql, insert_sql};

/// Handle to the destination database.
pub struct CardStore {
    conn: Connection,
}

impl CardStore {
    /// Opens (creating if needed) the database at `path`.
    ///
    /// Whether `path` may already exist is the caller's precondition to
    /// enforce; the store itself only opens the file.
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { conn })
    }

    /// Opens an in-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Open {
            path: ":memory:".into(),
            source: e,
        })?;
        Ok(Self { conn })
    }

    /// Creates the `cards` table for the given schema if it is absent.
    pub fn create_table(&self, schema: &TableSchema) -> Result<()> {
        let sql = create_table_sql(schema);
        debug!(%sql, "creating destination table");
        self.conn
            .execute(&sql, [])
            .map_err(|e| StoreError::CreateTable { source: e })?;
        Ok(())
    }

    /// Prepares a row loader for the given schema.
    ///
    /// The load timestamp is computed here, once, and stamped onto every
    /// row the loader inserts.
    pub fn loader(&self, schema: &TableSchema) -> Result<RowLoader<'_>> {
        let sql = insert_sql(schema);
        let statement = self
            .conn
            .prepare(&sql)
            .map_err(|e| StoreError::Prepare { source: e })?;
        Ok(RowLoader {
            statement,
            loaded_at: Utc::now().timestamp(),
            rows_loaded: 0,
        })
    }

    /// Direct access to the underlying connection, used by tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Inserts normalized rows with the run's load timestamp.
pub struct RowLoader<'conn> {
    statement: Statement<'conn>,
    loaded_at: i64,
    rows_loaded: usize,
}

impl RowLoader<'_> {
    /// Inserts one row, values in schema order.
    ///
    /// Values bind as text; SQLite column affinity coerces the scrubbed
    /// numeric fields into the declared integer/real columns. The insert
    /// auto-commits, so a later failure cannot roll this row back.
    pub fn insert(&mut self, row: &[String]) -> Result<()> {
        let values = row
            .iter()
            .map(|value| Value::Text(value.clone()))
            .chain([
                Value::Integer(self.loaded_at),
                Value::Integer(self.loaded_at),
            ]);
        self.statement
            .execute(params_from_iter(values))
            .map_err(|e| StoreError::Insert {
                row: self.rows_loaded + 1,
                source: e,
            })?;
        self.rows_loaded += 1;
        debug!(row = self.rows_loaded, "inserted card row");
        Ok(())
    }

    /// Number of rows inserted so far.
    pub fn rows_loaded(&self) -> usize {
        self.rows_loaded
    }

    /// The Unix timestamp stamped onto every row of this run.
    pub fn loaded_at(&self) -> i64 {
        self.loaded_at
    }

    /// Logs the final load count.
    pub fn finish(self) -> usize {
        info!(rows = self.rows_loaded, "load complete");
        self.rows_loaded
    }
}
