// main.rs - CLI entry point

use std::time::Instant;

use mcclean::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<()> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    // Validate all arguments
    let validation_result = validate_args(&args)?;

    println!("🧹 mcclean v{}", env!("CARGO_PKG_VERSION"));
    let total_start = Instant::now();

    // Load the roster
    println!("📥 Loading roster: {}", validation_result.mcatts_path.display());
    let mut roster = Table::from_path(&validation_result.mcatts_path)?;
    println!(
        "✅ Roster loaded: {} rows × {} columns",
        roster.n_rows(),
        roster.n_cols()
    );

    // Load the reference table (skipped with --no-merge)
    let reference = match &validation_result.legislators_path {
        Some(path) => {
            println!("📥 Loading legislators reference: {}", path.display());
            let table = Table::from_path(path)?;
            println!(
                "✅ Reference loaded: {} rows × {} columns",
                table.n_rows(),
                table.n_cols()
            );
            Some(table)
        }
        None => {
            println!("⏭️  Merge stage skipped (--no-merge)");
            None
        }
    };

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    let input_rows = roster.n_rows();

    // Merge: overwrite roster name/state from the reference
    if let Some(reference) = &reference {
        println!("🔗 Merging reference values on (id, congress)...");
        let report = merge_reference(&mut roster, reference, &validation_result.merge_columns)?;

        if report.all_matched() {
            println!("✅ All {} entries were successfully matched", report.matched);
        } else {
            println!(
                "\n⚠️  {} entries had no match in the reference table:",
                report.unmatched.len()
            );
            println!("ID, Congress, Name");
            println!("{}", "-".repeat(40));
            for entry in &report.unmatched {
                println!("{}, {}, {}", entry.id, entry.congress, entry.name);
            }
            println!("Total non-matches: {}", report.unmatched.len());
        }

        if let Some(log_path) = &validation_result.unmatched_log_path {
            write_unmatched_log(log_path, &report.unmatched)?;
            println!("📋 Unmatched entries written to: {}", log_path.display());
        }
    }

    // Normalize: strip diacritics from every cell
    println!("🔤 Stripping accents...");
    let changed = normalize_table(&mut roster);
    println!("✅ Accents removed from {} cells", changed);

    // Prune the redundant state-name column
    let statenm = &validation_result.merge_columns.statenm;
    if prune_column(&mut roster, statenm, validation_result.prune_policy)? {
        println!("🗑️  Removed '{}' column", statenm);
    } else {
        println!("⚠️  Warning: '{}' column not found in the input file", statenm);
    }

    // Write the cleaned roster; the join is row-preserving
    debug_assert_eq!(roster.n_rows(), input_rows);
    let output_path = validation_result
        .output_path
        .as_ref()
        .ok_or_else(|| CleanError::InvalidInput("--output is required".to_string()))?;
    write_table(output_path, &roster)?;
    println!(
        "✅ Cleaned roster written to: {} ({} rows × {} columns)",
        output_path.display(),
        roster.n_rows(),
        roster.n_cols()
    );

    println!("⏱️  Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}
