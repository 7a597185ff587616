// lib.rs - mcclean library root

//! # mcclean - Batch cleaner for legislator roster CSVs
//!
//! This library cleans a legislator committee-assignment roster ("mcatts")
//! against the voteview.com legislators reference dataset. The pipeline is
//! a single pass: load both tables, overwrite roster names and state codes
//! from the reference on the `(id, congress)` key, strip diacritics from
//! every cell, drop the redundant denormalized state-name column, and write
//! the result back out as CSV.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use mcclean::prelude::*;
//! use std::path::Path;
//!
//! let mut roster = Table::from_path(Path::new("mcatts_caucus.csv"))?;
//! let reference = Table::from_path(Path::new("legislators.csv"))?;
//!
//! let report = merge_reference(&mut roster, &reference, &MergeColumns::default())?;
//! normalize_table(&mut roster);
//! prune_column(&mut roster, "statenm", PrunePolicy::Strict)?;
//!
//! write_table(Path::new("mcatts_cleaned.csv"), &roster)?;
//! println!("{} unmatched rows", report.unmatched.len());
//! # Ok::<(), mcclean::CleanError>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, ValidationResult};
    pub use crate::core::{merge_reference, MergeColumns, MergeReport, UnmatchedEntry};
    pub use crate::core::{normalize_table, prune_column, strip_accents, PrunePolicy};
    pub use crate::data::Table;
    pub use crate::error::{CleanError, Result};
    pub use crate::output::{write_table, write_unmatched_log};
}

// Re-export main types at the root level for convenience
pub use crate::core::{MergeColumns, MergeReport, PrunePolicy, UnmatchedEntry};
pub use crate::data::Table;
pub use crate::error::{CleanError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("mcclean v{} - legislator roster CSV cleaner", VERSION)
}
