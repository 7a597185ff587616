// mod.rs - Core pipeline stages

pub mod merge;
pub mod normalize;
pub mod prune;

// Re-export main types for convenience
pub use merge::{merge_reference, MergeColumns, MergeReport, UnmatchedEntry};
pub use normalize::{normalize_table, strip_accents};
pub use prune::{prune_column, PrunePolicy};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Table;

    // Full pipeline over a single roster row: merge, strip accents, prune
    #[test]
    fn test_pipeline_end_to_end() {
        let mut roster = Table {
            headers: vec![
                "id".to_string(),
                "cong".to_string(),
                "mc.name".to_string(),
                "state".to_string(),
                "statenm".to_string(),
            ],
            rows: vec![vec![
                "14066".to_string(),
                "103".to_string(),
                "José García".to_string(),
                "CA".to_string(),
                "California".to_string(),
            ]],
        };
        let reference = Table {
            headers: vec![
                "id".to_string(),
                "congress".to_string(),
                "name".to_string(),
                "state".to_string(),
            ],
            rows: vec![vec![
                "14066".to_string(),
                "103".to_string(),
                "Jose Garcia".to_string(),
                "CA".to_string(),
            ]],
        };

        let report =
            merge_reference(&mut roster, &reference, &MergeColumns::default()).unwrap();
        assert!(report.all_matched());

        normalize_table(&mut roster);
        prune_column(&mut roster, "statenm", PrunePolicy::Strict).unwrap();

        assert_eq!(roster.headers, vec!["id", "cong", "mc.name", "state"]);
        assert_eq!(roster.rows[0], vec!["14066", "103", "Jose Garcia", "CA"]);
    }
}
