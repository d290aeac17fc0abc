//! SQL statement construction from an inferred schema.

use deckbox_ingest::TableSchema;

/// Name of the single destination table.
pub const TABLE_NAME: &str = "cards";

/// Builds the create-table statement for an inferred schema.
///
/// Columns appear in header order, followed by the two bookkeeping
/// timestamp columns. `IF NOT EXISTS` keeps table creation idempotent.
pub fn create_table_sql(schema: &TableSchema) -> String {
    let mut columns: Vec<String> = schema
        .columns
        .iter()
        .map(|column| format!("{} {}", column.key, column.column_type.sql_keyword()))
        .collect();
    columns.push("created_at int".to_string());
    columns.push("updated_at int".to_string());
    format!(
        "CREATE TABLE IF NOT EXISTS {TABLE_NAME} ({})",
        columns.join(", ")
    )
}

/// Builds the parameterized insert statement for an inferred schema.
///
/// One placeholder per schema column plus two for the load timestamps,
/// matching the tuple order produced by the ingest stage.
pub fn insert_sql(schema: &TableSchema) -> String {
    let placeholders = vec!["?"; schema.len() + 2].join(", ");
    format!("INSERT INTO {TABLE_NAME} VALUES ({placeholders})")
}
