//! Export loading pipeline.
//!
//! The pipeline runs these stages in order:
//! 1. **Preconditions**: input file exists, database file does not
//! 2. **Ingest**: open the export, infer the schema from the header row
//! 3. **Prepare**: create the `cards` table, prepare the insert statement
//! 4. **Load**: stream rows, one auto-committed insert per row
//!
//! A failure in stage 4 stops the run mid-stream; rows inserted before the
//! failing one stay committed.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use deckbox_ingest::ExportReader;
use deckbox_store::CardStore;

/// Explicit configuration for one pipeline run.
///
/// The pipeline reads no ambient environment or global mutable settings;
/// everything it needs arrives through this struct.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the Deckbox CSV export.
    pub input_file: PathBuf,
    /// Path for the SQLite database to create.
    pub database_file: PathBuf,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Rows inserted into the `cards` table.
    pub rows_loaded: usize,
    /// Columns inferred from the export header.
    pub columns: usize,
    /// Destination database path.
    pub database_file: PathBuf,
}

/// Checks the run preconditions before any work happens.
///
/// Requiring a fresh database file is what keeps re-runs from duplicating
/// rows: the loader itself never checks for existing data.
pub fn check_preconditions(config: &RunConfig) -> Result<()> {
    if !config.input_file.exists() {
        bail!("input file does not exist: {}", config.input_file.display());
    }
    if config.database_file.exists() {
        bail!(
            "database file already exists: {}",
            config.database_file.display()
        );
    }
    Ok(())
}

/// Runs the full ingest-and-load pipeline.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    check_preconditions(config)?;

    let span = info_span!("load", input = %config.input_file.display());
    let _guard = span.enter();

    let reader = ExportReader::open(&config.input_file).context("open export")?;
    let schema = reader.schema().clone();
    if schema.is_empty() {
        warn!("export has no header columns; creating an empty cards table");
    } else {
        info!(columns = schema.len(), "schema inferred");
    }

    let store = CardStore::create(&config.database_file).context("create database")?;
    store.create_table(&schema).context("create cards table")?;

    let mut loader = store.loader(&schema).context("prepare insert")?;
    for record in reader.records() {
        let row = record.context("read export row")?;
        loader.insert(&row).context("insert row")?;
    }
    let rows_loaded = loader.finish();

    Ok(RunSummary {
        rows_loaded,
        columns: schema.len(),
        database_file: config.database_file.clone(),
    })
}
