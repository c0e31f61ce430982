//! Clean command implementation.

use anyhow::Result;
use feature_data::{clean_records, write_panel, CsvPanelSource};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::CleanArgs;

use super::load_or_default;

pub async fn run(args: CleanArgs, config_path: &Path) -> Result<()> {
    let config = load_or_default(config_path)?;

    let input_dir = args
        .data
        .unwrap_or_else(|| PathBuf::from(&config.data.input_dir));
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.data.cleaned_file));

    info!(dir = %input_dir.display(), "loading panel");
    let source = CsvPanelSource::new(&input_dir)?;
    let raw = source.load_raw()?;
    let (rows, report) = clean_records(raw)?;

    write_panel(&output, &rows)?;
    info!(rows = rows.len(), output = %output.display(), "cleaned panel written");

    println!(
        "Cleaned {} raw records into {} rows (dropped {}, filled {}, removed {} duplicates)",
        report.loaded,
        report.rows,
        report.dropped_missing_identity,
        report.filled_values,
        report.duplicates_removed
    );
    println!("Cleaned panel written to {}", output.display());

    Ok(())
}
