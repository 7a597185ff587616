// prune.rs - Redundant column removal

use crate::data::Table;
use crate::error::Result;

/// What to do when the column to prune is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrunePolicy {
    /// Fail with `ColumnNotFound`
    Strict,
    /// Skip the stage; the caller prints a warning
    Lenient,
}

/// Remove the named column from the table.
///
/// Returns `true` if the column was removed, `false` if it was absent and
/// the policy is lenient. Column order of the remaining columns and row
/// order are untouched.
pub fn prune_column(table: &mut Table, name: &str, policy: PrunePolicy) -> Result<bool> {
    if table.column_index(name).is_none() && policy == PrunePolicy::Lenient {
        return Ok(false);
    }
    table.remove_column(name)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CleanError;

    fn sample() -> Table {
        Table {
            headers: vec![
                "id".to_string(),
                "state".to_string(),
                "statenm".to_string(),
                "party".to_string(),
            ],
            rows: vec![vec![
                "1".to_string(),
                "CA".to_string(),
                "California".to_string(),
                "D".to_string(),
            ]],
        }
    }

    #[test]
    fn test_prune_removes_column_everywhere() {
        let mut table = sample();
        let removed = prune_column(&mut table, "statenm", PrunePolicy::Strict).unwrap();
        assert!(removed);
        assert_eq!(table.headers, vec!["id", "state", "party"]);
        assert_eq!(table.rows[0], vec!["1", "CA", "D"]);
    }

    #[test]
    fn test_strict_missing_column_fails() {
        let mut table = sample();
        table.remove_column("statenm").unwrap();
        let err = prune_column(&mut table, "statenm", PrunePolicy::Strict).unwrap_err();
        assert!(matches!(err, CleanError::ColumnNotFound(_)));
    }

    #[test]
    fn test_lenient_missing_column_is_noop() {
        let mut table = sample();
        table.remove_column("statenm").unwrap();
        let before = table.clone();
        let removed = prune_column(&mut table, "statenm", PrunePolicy::Lenient).unwrap();
        assert!(!removed);
        assert_eq!(table, before);
    }
}
