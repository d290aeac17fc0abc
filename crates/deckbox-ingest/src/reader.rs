//! Streaming reader for Deckbox inventory exports.
//!
//! One pass over the file: the header row is consumed up front to infer
//! the schema, then data rows stream lazily as normalized records. No row
//! is retained after the caller consumes it.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecordsIntoIter};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::normalize::scrub_numeric;
use crate::schema::TableSchema;

/// An open export with its inferred schema.
#[derive(Debug)]
pub struct ExportReader {
    path: PathBuf,
    schema: TableSchema,
    reader: csv::Reader<File>,
}

impl ExportReader {
    /// Opens an export file and infers its schema from the header row.
    ///
    /// An export with no header row yields an empty schema; downstream
    /// stages then perform a degenerate no-op load.
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| IngestError::CsvParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let headers = reader
            .headers()
            .map_err(|e| IngestError::CsvParse {
                path: path.to_path_buf(),
                source: e,
            })?
            .clone();

        let schema = TableSchema::infer(headers.iter())?;
        debug!(
            path = %path.display(),
            columns = schema.len(),
            "inferred export schema"
        );

        Ok(Self {
            path: path.to_path_buf(),
            schema,
            reader,
        })
    }

    /// The schema inferred from the header row.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Consumes the reader, yielding normalized data records.
    pub fn records(self) -> Records {
        let expected = self.schema.len();
        let numeric_positions = self.schema.numeric_positions();
        Records {
            path: self.path,
            numeric_positions,
            expected,
            inner: self.reader.into_records(),
        }
    }
}

/// Lazy iterator over normalized export rows.
///
/// Each item is a row's values in header order, with integer/real
/// positions scrubbed to `[0-9.]`. Blank lines are skipped by the CSV
/// reader. A row whose field count differs from the header aborts
/// iteration with a shape error; there is no per-row skip policy.
pub struct Records {
    path: PathBuf,
    numeric_positions: Vec<usize>,
    expected: usize,
    inner: StringRecordsIntoIter<File>,
}

impl Iterator for Records {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.inner.next()? {
            Ok(record) => record,
            Err(e) => {
                return Some(Err(IngestError::CsvParse {
                    path: self.path.clone(),
                    source: e,
                }));
            }
        };

        if record.len() != self.expected {
            let line = record.position().map_or(0, |p| p.line());
            return Some(Err(IngestError::RowShape {
                line,
                expected: self.expected,
                found: record.len(),
            }));
        }

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        for &position in &self.numeric_positions {
            row[position] = scrub_numeric(&row[position]);
        }
        Some(Ok(row))
    }
}
