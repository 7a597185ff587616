// mod.rs - Delimited-text writers

use std::fs::create_dir_all;
use std::path::Path;

use crate::core::UnmatchedEntry;
use crate::data::loaders::delimiter_for_path;
use crate::data::Table;
use crate::error::{from_csv_error, CleanError, Result};

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| CleanError::io(parent, e))?;
        }
    }
    Ok(())
}

/// Serialize the table as delimited text, delimiter chosen by extension.
/// Column order and row order are written exactly as held in memory.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter_for_path(path))
        .from_path(path)
        .map_err(|e| from_csv_error(path, e))?;

    writer
        .write_record(&table.headers)
        .map_err(|e| from_csv_error(path, e))?;
    for row in &table.rows {
        writer.write_record(row).map_err(|e| from_csv_error(path, e))?;
    }
    writer.flush().map_err(|e| CleanError::io(path, e))?;
    Ok(())
}

/// Write the unmatched roster entries as a three-column CSV log
pub fn write_unmatched_log(path: &Path, unmatched: &[UnmatchedEntry]) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path).map_err(|e| from_csv_error(path, e))?;

    writer
        .write_record(["id", "congress", "name"])
        .map_err(|e| from_csv_error(path, e))?;
    for entry in unmatched {
        writer
            .write_record([&entry.id, &entry.congress, &entry.name])
            .map_err(|e| from_csv_error(path, e))?;
    }
    writer.flush().map_err(|e| CleanError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table {
            headers: vec!["id".to_string(), "name".to_string()],
            rows: vec![
                vec!["1".to_string(), "Jose Garcia".to_string()],
                vec!["2".to_string(), "Garcia, Jose".to_string()],
            ],
        }
    }

    #[test]
    fn test_write_then_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = sample();
        write_table(&path, &table).unwrap();

        let reloaded = Table::from_path(&path).unwrap();
        assert_eq!(reloaded, table);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.csv");
        write_table(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the target path makes the file uncreatable
        let path = dir.path().join("blocked.csv");
        std::fs::create_dir(&path).unwrap();
        let err = write_table(&path, &sample()).unwrap_err();
        assert!(matches!(err, CleanError::Io { .. }), "got {:?}", err);
    }

    #[test]
    fn test_unmatched_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unmatched.csv");
        let entries = vec![UnmatchedEntry {
            id: "99001".to_string(),
            congress: "103".to_string(),
            name: "Unknown Member".to_string(),
        }];
        write_unmatched_log(&path, &entries).unwrap();

        let log = Table::from_path(&path).unwrap();
        assert_eq!(log.headers, vec!["id", "congress", "name"]);
        assert_eq!(log.rows[0], vec!["99001", "103", "Unknown Member"]);
    }
}
