//! Panel partitioning.

use std::collections::BTreeMap;

use feature_core::error::EngineError;
use feature_core::types::{PanelRow, TickerGroup};

/// Split a panel into per-ticker groups, each sorted ascending by date.
///
/// Every input row lands in exactly one group, and the returned groups
/// are ordered by ticker, so walking them row by row yields the canonical
/// output order. An empty panel or a duplicate `(ticker, date)` pair is
/// an ingestion defect and fails the whole run.
pub fn partition(rows: Vec<PanelRow>) -> Result<Vec<TickerGroup>, EngineError> {
    if rows.is_empty() {
        return Err(EngineError::EmptyPanel);
    }

    let mut by_ticker: BTreeMap<String, Vec<PanelRow>> = BTreeMap::new();
    for row in rows {
        by_ticker.entry(row.ticker.clone()).or_default().push(row);
    }

    let mut groups = Vec::with_capacity(by_ticker.len());
    for (ticker, mut rows) in by_ticker {
        rows.sort_by_key(|r| r.date);

        for pair in rows.windows(2) {
            if pair[0].date == pair[1].date {
                return Err(EngineError::DuplicateDate {
                    ticker,
                    date: pair[0].date,
                });
            }
        }

        groups.push(TickerGroup::new(ticker, rows));
    }

    Ok(groups)
}
