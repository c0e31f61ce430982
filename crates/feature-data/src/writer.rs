//! CSV writers for cleaned and enriched tables.

use std::path::Path;

use feature_core::error::DataError;
use feature_core::types::{FeatureRow, PanelRow};

/// Column order of the enriched output table.
const FEATURE_HEADER: [&str; 18] = [
    "Ticker",
    "Date",
    "Open",
    "High",
    "Low",
    "Close",
    "Volume",
    "SMA_10",
    "EMA_10",
    "BB_Middle",
    "BB_Upper",
    "BB_Lower",
    "Daily_Return",
    "RSI_14",
    "MACD",
    "Signal_Line",
    "%K",
    "%D",
];

const PANEL_HEADER: [&str; 7] = ["Ticker", "Date", "Open", "High", "Low", "Close", "Volume"];

fn field(value: f64) -> String {
    value.to_string()
}

/// Undefined values are written as empty fields, never as NaN.
fn opt_field(value: Option<f64>) -> String {
    value.map(field).unwrap_or_default()
}

/// Write the enriched table.
pub fn write_features(path: &Path, rows: &[FeatureRow]) -> Result<(), DataError> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| DataError::WriteError(e.to_string()))?;

    writer
        .write_record(FEATURE_HEADER)
        .map_err(|e| DataError::WriteError(e.to_string()))?;

    for row in rows {
        let r = &row.row;
        let f = &row.features;
        writer
            .write_record([
                r.ticker.clone(),
                r.date.format("%Y-%m-%d").to_string(),
                field(r.open),
                field(r.high),
                field(r.low),
                field(r.close),
                field(r.volume),
                opt_field(f.sma_10),
                opt_field(f.ema_10),
                opt_field(f.bb_middle),
                opt_field(f.bb_upper),
                opt_field(f.bb_lower),
                opt_field(f.daily_return),
                opt_field(f.rsi_14),
                opt_field(f.macd),
                opt_field(f.signal_line),
                opt_field(f.percent_k),
                opt_field(f.percent_d),
            ])
            .map_err(|e| DataError::WriteError(e.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a cleaned panel.
pub fn write_panel(path: &Path, rows: &[PanelRow]) -> Result<(), DataError> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| DataError::WriteError(e.to_string()))?;

    writer
        .write_record(PANEL_HEADER)
        .map_err(|e| DataError::WriteError(e.to_string()))?;

    for r in rows {
        writer
            .write_record([
                r.ticker.clone(),
                r.date.format("%Y-%m-%d").to_string(),
                field(r.open),
                field(r.high),
                field(r.low),
                field(r.close),
                field(r.volume),
            ])
            .map_err(|e| DataError::WriteError(e.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}
