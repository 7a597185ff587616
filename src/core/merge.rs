// merge.rs - Reference merge for roster tables

use std::collections::HashMap;

use crate::data::Table;
use crate::error::{CleanError, Result};

/// Column names used by the merge stage.
///
/// Defaults match the mcatts roster and the voteview.com legislators
/// schema: the roster calls the congress number `cong` and the member
/// name `mc.name`, while the reference uses `congress` and `name`.
#[derive(Debug, Clone)]
pub struct MergeColumns {
    pub id: String,
    pub roster_congress: String,
    pub reference_congress: String,
    pub roster_name: String,
    pub reference_name: String,
    pub roster_state: String,
    pub reference_state: String,
    pub statenm: String,
}

impl Default for MergeColumns {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            roster_congress: "cong".to_string(),
            reference_congress: "congress".to_string(),
            roster_name: "mc.name".to_string(),
            reference_name: "name".to_string(),
            roster_state: "state".to_string(),
            reference_state: "state".to_string(),
            statenm: "statenm".to_string(),
        }
    }
}

/// A roster row that had no counterpart in the reference table
#[derive(Debug, Clone, PartialEq)]
pub struct UnmatchedEntry {
    pub id: String,
    pub congress: String,
    pub name: String,
}

/// Outcome of the merge stage
#[derive(Debug, Default)]
pub struct MergeReport {
    pub matched: usize,
    pub unmatched: Vec<UnmatchedEntry>,
}

impl MergeReport {
    pub fn all_matched(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Left join of the roster onto the reference table on `(id, congress)`.
///
/// Matched rows get their name and state overwritten with the reference
/// values; the denormalized state-name cell also receives the reference
/// state code, as it is redundant and slated for pruning. Unmatched rows
/// pass through unchanged and are collected in the report. Row count and
/// row order are preserved.
pub fn merge_reference(
    roster: &mut Table,
    reference: &Table,
    cols: &MergeColumns,
) -> Result<MergeReport> {
    let roster_id = require_key(roster, &cols.id, "roster")?;
    let roster_cong = require_key(roster, &cols.roster_congress, "roster")?;
    let ref_id = require_key(reference, &cols.id, "reference")?;
    let ref_cong = require_key(reference, &cols.reference_congress, "reference")?;

    let roster_name = roster.require_column(&cols.roster_name)?;
    let roster_state = roster.require_column(&cols.roster_state)?;
    let ref_name = reference.require_column(&cols.reference_name)?;
    let ref_state = reference.require_column(&cols.reference_state)?;

    // The statenm column may already have been pruned upstream
    let statenm = roster.column_index(&cols.statenm);

    // First reference occurrence wins for duplicate keys
    let mut lookup: HashMap<(&str, &str), (&str, &str)> = HashMap::new();
    for row in &reference.rows {
        let key = (row[ref_id].trim(), row[ref_cong].trim());
        lookup
            .entry(key)
            .or_insert((row[ref_name].as_str(), row[ref_state].as_str()));
    }

    let mut report = MergeReport::default();
    for row in &mut roster.rows {
        // Clone the hit into owned strings so the key borrow ends before
        // the row is written to
        let hit = lookup
            .get(&(row[roster_id].trim(), row[roster_cong].trim()))
            .map(|(name, state)| (name.to_string(), state.to_string()));
        match hit {
            Some((name, state)) => {
                row[roster_name] = name;
                if let Some(idx) = statenm {
                    row[idx] = state.clone();
                }
                row[roster_state] = state;
                report.matched += 1;
            }
            None => {
                report.unmatched.push(UnmatchedEntry {
                    id: row[roster_id].clone(),
                    congress: row[roster_cong].clone(),
                    name: row[roster_name].clone(),
                });
            }
        }
    }

    Ok(report)
}

fn require_key(table: &Table, column: &str, which: &'static str) -> Result<usize> {
    table.column_index(column).ok_or_else(|| CleanError::MergeKey {
        column: column.to_string(),
        table: which,
    })
}
