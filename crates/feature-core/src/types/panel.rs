//! Panel (multi-ticker daily OHLCV) data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cleaned daily OHLCV observation for a single ticker.
///
/// Produced by the ingestion layer; immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRow {
    /// Ticker symbol
    pub ticker: String,
    /// Trading date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl PanelRow {
    /// Create a new panel row.
    pub fn new(
        ticker: impl Into<String>,
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// The row's identity key.
    pub fn key(&self) -> RowKey {
        RowKey {
            ticker: self.ticker.clone(),
            date: self.date,
        }
    }
}

/// Row identity: `(ticker, date)`.
///
/// Every computed feature value carries one of these so results can be
/// merged back by key rather than by position. The derived ordering
/// (ticker ascending, then date ascending) is the canonical output order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowKey {
    /// Ticker symbol
    pub ticker: String,
    /// Trading date
    pub date: NaiveDate,
}

/// All rows of one ticker, sorted strictly ascending by date.
///
/// Invariant: no two rows share a date. The partitioner rejects panels
/// that violate this rather than resolving the tie.
#[derive(Debug, Clone)]
pub struct TickerGroup {
    ticker: String,
    rows: Vec<PanelRow>,
}

impl TickerGroup {
    /// Create a group from rows already sorted ascending by date.
    pub fn new(ticker: String, rows: Vec<PanelRow>) -> Self {
        Self { ticker, rows }
    }

    /// The group's ticker symbol.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Number of rows in the group.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the group is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows as a slice.
    pub fn rows(&self) -> &[PanelRow] {
        &self.rows
    }

    /// Get a row by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&PanelRow> {
        self.rows.get(index)
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.close).collect()
    }

    /// Extract high prices as a vector.
    pub fn highs(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.high).collect()
    }

    /// Extract low prices as a vector.
    pub fn lows(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.low).collect()
    }

    /// Extract the dates as a vector.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.date).collect()
    }

    /// Get an iterator over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &PanelRow> {
        self.rows.iter()
    }

    /// Consume the group, returning its rows.
    pub fn into_rows(self) -> Vec<PanelRow> {
        self.rows
    }
}
