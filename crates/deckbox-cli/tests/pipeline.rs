//! End-to-end pipeline tests: export file in, SQLite database out.

use std::fs;

use deckbox_cli::pipeline::{RunConfig, run};
use rusqlite::Connection;
use tempfile::TempDir;

fn setup(export: &str) -> (TempDir, RunConfig) {
    let dir = TempDir::new().unwrap();
    let input_file = dir.path().join("export.csv");
    fs::write(&input_file, export).unwrap();
    let config = RunConfig {
        input_file,
        database_file: dir.path().join("database.sqlite3"),
    };
    (dir, config)
}

#[test]
fn test_round_trip() {
    let (_dir, config) = setup("Count,Name,Price\n3,\"Foo\",$4.99\n");
    let summary = run(&config).unwrap();
    assert_eq!(summary.rows_loaded, 1);
    assert_eq!(summary.columns, 3);

    let conn = Connection::open(&config.database_file).unwrap();
    let (count, name, price, created_at, updated_at) = conn
        .query_row(
            "SELECT count, name, price, created_at, updated_at FROM cards",
            [],
            |r| {
                Ok((
                    r.get::<_, i64>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, f64>(2)?,
                    r.get::<_, i64>(3)?,
                    r.get::<_, i64>(4)?,
                ))
            },
        )
        .unwrap();
    assert_eq!(count, 3);
    assert_eq!(name, "Foo");
    assert_eq!(price, 4.99);
    assert_eq!(created_at, updated_at);

    // Column affinity coerced the scrubbed values into declared types.
    let (count_type, price_type) = conn
        .query_row("SELECT typeof(count), typeof(price) FROM cards", [], |r| {
            Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?))
        })
        .unwrap();
    assert_eq!(count_type, "integer");
    assert_eq!(price_type, "real");
}

#[test]
fn test_row_count_matches_data_lines() {
    let (_dir, config) = setup("Count,Name\n1,Foo\n\n2,Bar\n3,Baz\n");
    let summary = run(&config).unwrap();
    assert_eq!(summary.rows_loaded, 3);

    let conn = Connection::open(&config.database_file).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM cards", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 3);
}

#[test]
fn test_header_only_export_creates_empty_table() {
    let (_dir, config) = setup("Count,Name,Price\n");
    let summary = run(&config).unwrap();
    assert_eq!(summary.rows_loaded, 0);

    let conn = Connection::open(&config.database_file).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM cards", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn test_missing_input_file_fails_before_any_work() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig {
        input_file: dir.path().join("missing.csv"),
        database_file: dir.path().join("database.sqlite3"),
    };
    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("input file does not exist"));
    assert!(!config.database_file.exists());
}

#[test]
fn test_existing_database_file_fails_before_any_work() {
    let (dir, mut config) = setup("Count,Name\n1,Foo\n");
    let existing = dir.path().join("already-there.sqlite3");
    fs::write(&existing, "not a database").unwrap();
    config.database_file = existing.clone();

    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("database file already exists"));
    // The pre-existing file is left untouched.
    assert_eq!(fs::read(&existing).unwrap(), b"not a database");
}

#[test]
fn test_short_row_aborts_and_keeps_earlier_rows() {
    let (_dir, config) = setup("Count,Name,Price\n1,Foo,$1.00\n2,Bar\n3,Baz,$3.00\n");
    let err = run(&config).unwrap_err();
    assert!(format!("{err:#}").contains("expected 3"));

    let conn = Connection::open(&config.database_file).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM cards", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn test_colliding_headers_fail_fast() {
    let (_dir, config) = setup("Card Number,cardnumber\n1,2\n");
    let err = run(&config).unwrap_err();
    assert!(format!("{err:#}").contains("duplicate column key"));
    assert!(!config.database_file.exists());
}
