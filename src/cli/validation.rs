// validation.rs - Input validation utilities

use std::path::{Path, PathBuf};

use crate::cli::args::Args;
use crate::core::{MergeColumns, PrunePolicy};
use crate::error::{CleanError, Result};

/// Resolved, validated run parameters
#[derive(Debug)]
pub struct ValidationResult {
    pub mcatts_path: PathBuf,
    /// Absent when --no-merge is set
    pub legislators_path: Option<PathBuf>,
    /// Absent when --dry-run is set
    pub output_path: Option<PathBuf>,
    pub unmatched_log_path: Option<PathBuf>,
    pub merge_columns: MergeColumns,
    pub prune_policy: PrunePolicy,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult> {
    let mcatts = args
        .mcatts
        .as_ref()
        .ok_or_else(|| CleanError::InvalidInput("--mcatts is required".to_string()))?;
    let mcatts_path = existing_file(mcatts, "--mcatts")?;

    let legislators_path = if args.no_merge {
        if args.legislators.is_some() {
            return Err(CleanError::InvalidInput(
                "--legislators is not compatible with --no-merge (no reference table is read)"
                    .to_string(),
            ));
        }
        if args.unmatched_log.is_some() {
            return Err(CleanError::InvalidInput(
                "--unmatched-log is not compatible with --no-merge (no merge is performed)"
                    .to_string(),
            ));
        }
        None
    } else {
        let legislators = args.legislators.as_ref().ok_or_else(|| {
            CleanError::InvalidInput(
                "--legislators is required (or pass --no-merge to skip the merge)".to_string(),
            )
        })?;
        Some(existing_file(legislators, "--legislators")?)
    };

    let output_path = if args.dry_run {
        None
    } else {
        let output = args
            .output
            .as_ref()
            .ok_or_else(|| CleanError::InvalidInput("--output is required".to_string()))?;
        Some(PathBuf::from(output))
    };

    for (name, value) in [
        ("--id-column", &args.id_column),
        ("--congress-column", &args.congress_column),
        ("--reference-congress-column", &args.reference_congress_column),
        ("--name-column", &args.name_column),
        ("--reference-name-column", &args.reference_name_column),
        ("--state-column", &args.state_column),
        ("--reference-state-column", &args.reference_state_column),
        ("--statenm-column", &args.statenm_column),
    ] {
        if value.trim().is_empty() {
            return Err(CleanError::InvalidInput(format!(
                "{} must not be empty",
                name
            )));
        }
    }

    let merge_columns = MergeColumns {
        id: args.id_column.clone(),
        roster_congress: args.congress_column.clone(),
        reference_congress: args.reference_congress_column.clone(),
        roster_name: args.name_column.clone(),
        reference_name: args.reference_name_column.clone(),
        roster_state: args.state_column.clone(),
        reference_state: args.reference_state_column.clone(),
        statenm: args.statenm_column.clone(),
    };

    let prune_policy = if args.lenient_prune {
        PrunePolicy::Lenient
    } else {
        PrunePolicy::Strict
    };

    Ok(ValidationResult {
        mcatts_path,
        legislators_path,
        output_path,
        unmatched_log_path: args.unmatched_log.as_ref().map(PathBuf::from),
        merge_columns,
        prune_policy,
    })
}

fn existing_file(path: &str, flag: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(path);
    if !Path::new(path).is_file() {
        return Err(CleanError::InvalidInput(format!(
            "{} path '{}' does not exist or is not a file",
            flag, path
        )));
    }
    Ok(path_buf)
}
