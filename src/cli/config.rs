// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CleanError, Result};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub mcatts: Option<String>,
    pub legislators: Option<String>,
    pub output: Option<String>,

    // Column names
    pub id_column: Option<String>,
    pub congress_column: Option<String>,
    pub reference_congress_column: Option<String>,
    pub name_column: Option<String>,
    pub reference_name_column: Option<String>,
    pub state_column: Option<String>,
    pub reference_state_column: Option<String>,
    pub statenm_column: Option<String>,

    // Reporting
    pub unmatched_log: Option<String>,

    // Flags
    pub no_merge: Option<bool>,
    pub lenient_prune: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CleanError::io(path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CleanError::parse(path, format!("invalid TOML: {}", e)))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# mcclean.toml - Configuration file for mcclean
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Path to the mcatts roster CSV to clean
mcatts = "mcatts_caucus_103_116.csv"

# Path to the reference legislators CSV (voteview.com schema)
legislators = "legislators.csv"

# Destination path for the cleaned CSV
output = "mcatts_cleaned.csv"

# =============================================================================
# COLUMN NAMES
# =============================================================================

# Legislator identifier column, shared by both tables
id_column = "id"

# Congress column in the roster / reference table
congress_column = "cong"
reference_congress_column = "congress"

# Member name column in the roster / reference table
name_column = "mc.name"
reference_name_column = "name"

# State code column in the roster / reference table
state_column = "state"
reference_state_column = "state"

# Denormalized state-name column to prune
statenm_column = "statenm"

# =============================================================================
# REPORTING
# =============================================================================

# Write unmatched roster entries to a CSV log
# unmatched_log = "unmatched.csv"

# =============================================================================
# FLAGS
# =============================================================================

# Skip the reference merge; run accent stripping and pruning only
no_merge = false

# Warn instead of failing when the pruned column is absent
lenient_prune = false

# Validate inputs without writing output
dry_run = false
"#
        .to_string()
    }
}
