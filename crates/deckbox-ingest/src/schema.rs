//! Header-to-schema inference.
//!
//! Each raw header token becomes a column key (lowercased, whitespace
//! removed). Column types default to text; a fixed override list assigns
//! integer and real types to the handful of numeric Deckbox fields.

use crate::error::{IngestError, Result};

/// Keys stored as integers in the destination table.
const INTEGER_KEYS: [&str; 3] = ["count", "tradelistcount", "cardnumber"];

/// Keys stored as reals in the destination table.
const REAL_KEYS: [&str; 2] = ["myprice", "price"];

/// Storage class assigned to an inferred column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    Real,
}

impl ColumnType {
    /// SQL type keyword used in the destination table definition.
    pub fn sql_keyword(self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Integer => "int",
            ColumnType::Real => "real",
        }
    }

    /// Returns true for columns whose values get the numeric scrub.
    pub fn is_numeric(self) -> bool {
        !matches!(self, ColumnType::Text)
    }
}

/// Normalizes a raw header token into a column key.
///
/// Lowercases, removes all whitespace, and strips a leading BOM if the
/// export carries one.
pub fn normalize_key(raw: &str) -> String {
    raw.trim_matches('\u{feff}')
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Looks up the storage class for a normalized key.
pub fn type_for_key(key: &str) -> ColumnType {
    if INTEGER_KEYS.contains(&key) {
        ColumnType::Integer
    } else if REAL_KEYS.contains(&key) {
        ColumnType::Real
    } else {
        ColumnType::Text
    }
}

/// An inferred destination column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub column_type: ColumnType,
}

/// Ordered column schema inferred from an export's header row.
///
/// Column order matches header order and defines both the destination
/// table layout and the tuple positions used for inserts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSchema {
    pub columns: Vec<Column>,
}

impl TableSchema {
    /// Infers the schema from raw header tokens.
    ///
    /// Pure function of the header sequence. Fails if two distinct headers
    /// normalize to the same key, since they would collide in the
    /// destination table.
    pub fn infer<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut columns: Vec<Column> = Vec::new();
        for header in headers {
            let key = normalize_key(header.as_ref());
            if columns.iter().any(|column| column.key == key) {
                return Err(IngestError::DuplicateKey { key });
            }
            let column_type = type_for_key(&key);
            columns.push(Column { key, column_type });
        }
        Ok(Self { columns })
    }

    /// Number of inferred columns (bookkeeping columns excluded).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the export had no header tokens.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Positions of integer/real columns, in header order.
    pub fn numeric_positions(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.column_type.is_numeric())
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Card Number"), "cardnumber");
        assert_eq!(normalize_key("Tradelist Count"), "tradelistcount");
        assert_eq!(normalize_key("Name"), "name");
        assert_eq!(normalize_key("\u{feff}Count"), "count");
    }

    #[test]
    fn test_type_for_key() {
        assert_eq!(type_for_key("count"), ColumnType::Integer);
        assert_eq!(type_for_key("tradelistcount"), ColumnType::Integer);
        assert_eq!(type_for_key("cardnumber"), ColumnType::Integer);
        assert_eq!(type_for_key("myprice"), ColumnType::Real);
        assert_eq!(type_for_key("price"), ColumnType::Real);
        assert_eq!(type_for_key("name"), ColumnType::Text);
        assert_eq!(type_for_key("edition"), ColumnType::Text);
    }

    #[test]
    fn test_infer_is_deterministic() {
        let headers = ["Count", "Name", "My Price"];
        let first = TableSchema::infer(headers).unwrap();
        let second = TableSchema::infer(headers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_infer_preserves_header_order() {
        let schema = TableSchema::infer(["Name", "Count", "Price"]).unwrap();
        let keys: Vec<&str> = schema
            .columns
            .iter()
            .map(|column| column.key.as_str())
            .collect();
        assert_eq!(keys, vec!["name", "count", "price"]);
        assert_eq!(schema.numeric_positions(), vec![1, 2]);
    }

    #[test]
    fn test_infer_rejects_colliding_keys() {
        let result = TableSchema::infer(["Card Number", "cardnumber"]);
        assert!(matches!(
            result,
            Err(IngestError::DuplicateKey { key }) if key == "cardnumber"
        ));
    }

    #[test]
    fn test_infer_empty_headers() {
        let schema = TableSchema::infer(Vec::<String>::new()).unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
    }
}
