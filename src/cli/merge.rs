// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::error::Result;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.mcatts.is_none() {
            self.mcatts = config.mcatts;
        }
        if self.legislators.is_none() {
            self.legislators = config.legislators;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Column names (only override defaults, not explicit CLI values)
        if self.id_column == "id" && config.id_column.is_some() {
            self.id_column = config.id_column.unwrap();
        }
        if self.congress_column == "cong" && config.congress_column.is_some() {
            self.congress_column = config.congress_column.unwrap();
        }
        if self.reference_congress_column == "congress"
            && config.reference_congress_column.is_some()
        {
            self.reference_congress_column = config.reference_congress_column.unwrap();
        }
        if self.name_column == "mc.name" && config.name_column.is_some() {
            self.name_column = config.name_column.unwrap();
        }
        if self.reference_name_column == "name" && config.reference_name_column.is_some() {
            self.reference_name_column = config.reference_name_column.unwrap();
        }
        if self.state_column == "state" && config.state_column.is_some() {
            self.state_column = config.state_column.unwrap();
        }
        if self.reference_state_column == "state" && config.reference_state_column.is_some() {
            self.reference_state_column = config.reference_state_column.unwrap();
        }
        if self.statenm_column == "statenm" && config.statenm_column.is_some() {
            self.statenm_column = config.statenm_column.unwrap();
        }

        // Reporting
        if self.unmatched_log.is_none() {
            self.unmatched_log = config.unmatched_log;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.no_merge && config.no_merge.unwrap_or(false) {
            self.no_merge = true;
        }
        if !self.lenient_prune && config.lenient_prune.unwrap_or(false) {
            self.lenient_prune = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
