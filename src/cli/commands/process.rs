//! Process command implementation.

use anyhow::Result;
use feature_core::traits::PanelSource;
use feature_data::{write_features, CsvPanelSource};
use feature_engine::FeatureEngine;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::ProcessArgs;

use super::load_or_default;

/// Run summary printed after a successful pass.
#[derive(Debug, Serialize)]
struct ProcessSummary {
    rows: usize,
    tickers: usize,
    output: String,
}

impl fmt::Display for ProcessSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Processed {} rows across {} tickers",
            self.rows, self.tickers
        )?;
        write!(f, "Enriched table written to {}", self.output)
    }
}

pub async fn run(args: ProcessArgs, config_path: &Path) -> Result<()> {
    let config = load_or_default(config_path)?;

    let input_dir = args
        .data
        .unwrap_or_else(|| PathBuf::from(&config.data.input_dir));
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.data.output_file));

    info!(dir = %input_dir.display(), "loading panel");
    let source = CsvPanelSource::new(&input_dir)?;
    let rows = source.load().await?;

    let engine = FeatureEngine::default();
    let features = engine.run(rows)?;

    write_features(&output, &features)?;
    info!(rows = features.len(), output = %output.display(), "enriched table written");

    // Rows arrive sorted by ticker, so distinct tickers are contiguous
    let mut tickers = 0usize;
    let mut last: Option<&str> = None;
    for row in &features {
        if last != Some(row.row.ticker.as_str()) {
            tickers += 1;
            last = Some(row.row.ticker.as_str());
        }
    }

    let summary = ProcessSummary {
        rows: features.len(),
        tickers,
        output: output.display().to_string(),
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => println!("{summary}"),
    }

    Ok(())
}
