// csv.rs - Delimited-text loader (comma- and tab-separated)

use std::path::Path;

use crate::data::table::Table;
use crate::error::{from_csv_error, CleanError, Result};

/// Pick the field delimiter from the file extension.
/// `.tsv` and `.tab` are tab-separated, everything else is comma-separated.
pub fn delimiter_for_path(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tsv") | Some("tab") => b'\t',
        _ => b',',
    }
}

impl Table {
    /// Load a delimited file into memory. The header row is required and
    /// every data row must have the same number of fields as the header.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter_for_path(path))
            .has_headers(true)
            .flexible(false)
            .from_path(path)
            .map_err(|e| from_csv_error(path, e))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| from_csv_error(path, e))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(CleanError::parse(path, "empty file: header row required"));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| from_csv_error(path, e))?;
            rows.push(record.iter().map(|f| f.to_string()).collect());
        }

        Ok(Table { headers, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_csv() {
        let file = write_temp("id,name\n1,Ana\n2,Bo\n", ".csv");
        let table = Table::from_path(file.path()).unwrap();
        assert_eq!(table.headers, vec!["id", "name"]);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.rows[0], vec!["1", "Ana"]);
    }

    #[test]
    fn test_load_tsv_by_extension() {
        let file = write_temp("id\tname\n1\tAna\n", ".tsv");
        let table = Table::from_path(file.path()).unwrap();
        assert_eq!(table.headers, vec!["id", "name"]);
        assert_eq!(table.rows[0], vec!["1", "Ana"]);
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let file = write_temp("id,name\n1,Ana,extra\n", ".csv");
        let err = Table::from_path(file.path()).unwrap_err();
        assert!(matches!(err, CleanError::Parse { .. }), "got {:?}", err);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Table::from_path(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, CleanError::Io { .. }), "got {:?}", err);
    }

    #[test]
    fn test_empty_file_is_parse_error() {
        let file = write_temp("", ".csv");
        let err = Table::from_path(file.path()).unwrap_err();
        assert!(matches!(err, CleanError::Parse { .. }), "got {:?}", err);
    }

    #[test]
    fn test_quoted_fields() {
        let file = write_temp("id,name\n1,\"García, José\"\n", ".csv");
        let table = Table::from_path(file.path()).unwrap();
        assert_eq!(table.rows[0][1], "García, José");
    }
}
