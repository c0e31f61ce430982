//! Panel cleaning pass.
//!
//! Turns raw CSV records into the null-free typed panel the engine
//! expects: rows missing their identity are dropped, numeric gaps are
//! filled with the column mean, dates are parsed, exact duplicates are
//! removed. Duplicate `(ticker, date)` pairs with differing values are
//! left for the engine's partitioner to reject.

use chrono::NaiveDate;
use feature_core::error::DataError;
use feature_core::types::PanelRow;
use tracing::info;

use crate::csv_source::RawRecord;

/// Counters from one cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Raw records received
    pub loaded: usize,
    /// Rows dropped for a missing ticker or date
    pub dropped_missing_identity: usize,
    /// Individual numeric values filled with the column mean
    pub filled_values: usize,
    /// Exact duplicate rows removed
    pub duplicates_removed: usize,
    /// Rows in the cleaned panel
    pub rows: usize,
}

/// Parse an 8-digit `YYYYMMDD` date value.
fn parse_yyyymmdd(value: &str, file: &str) -> Result<NaiveDate, DataError> {
    let value = value.trim();
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DataError::InvalidDate {
            file: file.to_string(),
            value: value.to_string(),
        });
    }
    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| DataError::InvalidDate {
        file: file.to_string(),
        value: value.to_string(),
    })
}

/// Mean over the present values of one numeric column.
fn column_mean(
    records: &[RawRecord],
    name: &str,
    get: impl Fn(&RawRecord) -> Option<f64>,
) -> Result<f64, DataError> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for record in records {
        if let Some(value) = get(record) {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        return Err(DataError::EmptyColumn(name.to_string()));
    }
    Ok(sum / count as f64)
}

/// Clean a raw record batch into typed panel rows.
pub fn clean_records(records: Vec<RawRecord>) -> Result<(Vec<PanelRow>, CleanReport), DataError> {
    let mut report = CleanReport {
        loaded: records.len(),
        ..CleanReport::default()
    };

    // Identity cannot be imputed
    let records: Vec<RawRecord> = records
        .into_iter()
        .filter(|r| {
            let keep = r.ticker.as_deref().is_some_and(|t| !t.is_empty()) && r.date.is_some();
            if !keep {
                report.dropped_missing_identity += 1;
            }
            keep
        })
        .collect();

    if records.is_empty() {
        return Err(DataError::EmptyPanel);
    }

    let open_mean = column_mean(&records, "Open", |r| r.open)?;
    let high_mean = column_mean(&records, "High", |r| r.high)?;
    let low_mean = column_mean(&records, "Low", |r| r.low)?;
    let close_mean = column_mean(&records, "Close", |r| r.close)?;
    let volume_mean = column_mean(&records, "Volume", |r| r.volume)?;

    let mut fill = |value: Option<f64>, mean: f64| {
        value.unwrap_or_else(|| {
            report.filled_values += 1;
            mean
        })
    };

    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        let date = parse_yyyymmdd(record.date.as_deref().unwrap_or_default(), &record.file)?;
        rows.push(PanelRow {
            ticker: record.ticker.clone().unwrap_or_default(),
            date,
            open: fill(record.open, open_mean),
            high: fill(record.high, high_mean),
            low: fill(record.low, low_mean),
            close: fill(record.close, close_mean),
            volume: fill(record.volume, volume_mean),
        });
    }

    // Exact duplicates collapse to their first occurrence; same-key rows
    // with differing values survive and fail later in the partitioner.
    let before = rows.len();
    rows.sort_by(|a, b| (&a.ticker, a.date).cmp(&(&b.ticker, b.date)));
    rows.dedup();
    report.duplicates_removed = before - rows.len();
    report.rows = rows.len();

    info!(
        loaded = report.loaded,
        dropped = report.dropped_missing_identity,
        filled = report.filled_values,
        duplicates = report.duplicates_removed,
        rows = report.rows,
        "cleaned panel"
    );

    Ok((rows, report))
}
