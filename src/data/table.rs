// table.rs - In-memory tabular data

use crate::error::{CleanError, Result};

/// An ordered, header-addressed table of string cells.
///
/// Rows keep the column order of the header; every row has exactly
/// `headers.len()` cells (the loader rejects ragged input).
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    /// Index of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of a column, or `ColumnNotFound`
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| CleanError::ColumnNotFound(name.to_string()))
    }

    /// Remove a column by name, shifting later columns left.
    /// Relative order of the remaining columns is preserved.
    pub fn remove_column(&mut self, name: &str) -> Result<()> {
        let idx = self.require_column(name)?;
        self.headers.remove(idx);
        for row in &mut self.rows {
            row.remove(idx);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table {
            headers: vec!["id".to_string(), "name".to_string(), "state".to_string()],
            rows: vec![
                vec!["1".to_string(), "a".to_string(), "NY".to_string()],
                vec!["2".to_string(), "b".to_string(), "CA".to_string()],
            ],
        }
    }

    #[test]
    fn test_column_index() {
        let table = sample();
        assert_eq!(table.column_index("id"), Some(0));
        assert_eq!(table.column_index("state"), Some(2));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn test_require_column_error() {
        let table = sample();
        let err = table.require_column("missing").unwrap_err();
        match err {
            CleanError::ColumnNotFound(name) => assert_eq!(name, "missing"),
            other => panic!("Expected ColumnNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_column_preserves_order() {
        let mut table = sample();
        table.remove_column("name").unwrap();
        assert_eq!(table.headers, vec!["id", "state"]);
        assert_eq!(table.rows[0], vec!["1", "NY"]);
        assert_eq!(table.rows[1], vec!["2", "CA"]);
    }
}
