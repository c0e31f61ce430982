//! Feature engine orchestration.

use feature_core::error::EngineError;
use feature_core::traits::{RangeIndicator, SeriesIndicator};
use feature_core::types::{FeatureRow, FeatureSet, PanelRow, TickerGroup};
use feature_indicators::{BollingerBands, Ema, Macd, Rsi, Sma, Stochastic};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assemble::FeatureAssembler;
use crate::partition::partition;

/// Indicator parameters for one engine run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureParams {
    /// SMA / Bollinger middle band window
    pub sma_window: usize,
    /// Bollinger band width in rolling standard deviations
    pub bollinger_multiplier: f64,
    /// EMA span
    pub ema_span: usize,
    /// RSI lookback period
    pub rsi_period: usize,
    /// MACD fast EMA span
    pub macd_fast: usize,
    /// MACD slow EMA span
    pub macd_slow: usize,
    /// MACD signal EMA span
    pub macd_signal: usize,
    /// Stochastic %K window
    pub stochastic_k: usize,
    /// Stochastic %D smoothing period
    pub stochastic_d: usize,
}

impl Default for FeatureParams {
    fn default() -> Self {
        Self {
            sma_window: 10,
            bollinger_multiplier: 2.0,
            ema_span: 10,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            stochastic_k: 14,
            stochastic_d: 3,
        }
    }
}

/// The feature computation engine.
///
/// A single deterministic batch pass: partition the panel by ticker, run
/// every indicator engine over each group's series, then reassemble by
/// `(ticker, date)` key. Groups share no state, so group computation
/// order is irrelevant.
#[derive(Debug, Clone, Default)]
pub struct FeatureEngine {
    params: FeatureParams,
}

impl FeatureEngine {
    /// Create an engine with the given parameters.
    pub fn new(params: FeatureParams) -> Self {
        Self { params }
    }

    /// The engine's parameters.
    pub fn params(&self) -> &FeatureParams {
        &self.params
    }

    /// Compute the enriched table for a panel.
    ///
    /// Returns one `FeatureRow` per input row, ordered by ticker then
    /// date. Row count is preserved exactly.
    pub fn run(&self, rows: Vec<PanelRow>) -> Result<Vec<FeatureRow>, EngineError> {
        let groups = partition(rows)?;
        debug!(groups = groups.len(), "partitioned panel");

        let mut assembler = FeatureAssembler::new();
        for group in &groups {
            let features = self.compute_group(group);
            assembler.insert_group(group, features)?;
        }

        assembler.assemble(groups)
    }

    /// Compute all engineered columns for one group.
    fn compute_group(&self, group: &TickerGroup) -> Vec<FeatureSet> {
        let closes = group.closes();
        let highs = group.highs();
        let lows = group.lows();

        let sma = Sma::new(self.params.sma_window).compute(&closes);
        let ema = Ema::new(self.params.ema_span).compute(&closes);
        let bands = BollingerBands::new(self.params.sma_window, self.params.bollinger_multiplier)
            .compute(&closes);
        let returns = daily_returns(&closes);
        let rsi = Rsi::new(self.params.rsi_period).compute(&closes);
        let macd = Macd::with_spans(
            self.params.macd_fast,
            self.params.macd_slow,
            self.params.macd_signal,
        )
        .compute(&closes);
        let stochastic = Stochastic::with_periods(self.params.stochastic_k, self.params.stochastic_d)
            .compute(&highs, &lows, &closes);

        (0..group.len())
            .map(|i| FeatureSet {
                sma_10: sma[i],
                ema_10: Some(ema[i]),
                bb_middle: bands[i].map(|b| b.middle),
                bb_upper: bands[i].map(|b| b.upper),
                bb_lower: bands[i].map(|b| b.lower),
                daily_return: returns[i],
                rsi_14: rsi[i],
                macd: Some(macd[i].macd),
                signal_line: Some(macd[i].signal),
                percent_k: stochastic[i].k,
                percent_d: stochastic[i].d,
            })
            .collect()
    }
}

/// One-day fractional return, undefined at a group's first row.
fn daily_returns(closes: &[f64]) -> Vec<Option<f64>> {
    let mut result = vec![None; closes.len()];
    for i in 1..closes.len() {
        if closes[i - 1] != 0.0 {
            result[i] = Some(closes[i] / closes[i - 1] - 1.0);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn row(ticker: &str, day: u32, close: f64) -> PanelRow {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        PanelRow::new(
            ticker,
            date,
            close,
            close + 1.0,
            close - 1.0,
            close,
            1000.0,
        )
    }

    fn aaa_panel() -> Vec<PanelRow> {
        let closes = [
            10.0, 11.0, 9.0, 12.0, 13.0, 11.0, 14.0, 15.0, 13.0, 16.0, 17.0, 15.0,
        ];
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| row("AAA", i as u32 + 1, c))
            .collect()
    }

    #[test]
    fn test_sma_scenario() {
        let engine = FeatureEngine::default();
        let result = engine.run(aaa_panel()).unwrap();

        assert_eq!(result.len(), 12);
        assert!(result[..9].iter().all(|r| r.features.sma_10.is_none()));
        assert!((result[9].features.sma_10.unwrap() - 12.4).abs() < 1e-10);
        assert!((result[10].features.sma_10.unwrap() - 13.1).abs() < 1e-10);
    }

    #[test]
    fn test_bollinger_consistent_with_sma() {
        let engine = FeatureEngine::default();
        let result = engine.run(aaa_panel()).unwrap();

        for r in &result {
            assert_eq!(r.features.bb_middle, r.features.sma_10);
            match (r.features.bb_upper, r.features.bb_middle, r.features.bb_lower) {
                (Some(upper), Some(middle), Some(lower)) => {
                    assert!(upper >= middle && middle >= lower);
                }
                (None, None, None) => {}
                other => panic!("bands partially defined: {other:?}"),
            }
        }
    }

    #[test]
    fn test_ema_and_macd_have_no_undefined_prefix() {
        let engine = FeatureEngine::default();
        let result = engine.run(aaa_panel()).unwrap();

        assert_eq!(result[0].features.ema_10, Some(result[0].row.close));
        for r in &result {
            assert!(r.features.ema_10.is_some());
            assert!(r.features.macd.is_some());
            assert!(r.features.signal_line.is_some());
        }
    }

    #[test]
    fn test_daily_return() {
        let engine = FeatureEngine::default();
        let result = engine.run(aaa_panel()).unwrap();

        assert_eq!(result[0].features.daily_return, None);
        assert!((result[1].features.daily_return.unwrap() - 0.1).abs() < 1e-10); // 11/10 - 1
    }

    #[test]
    fn test_single_row_group() {
        let engine = FeatureEngine::default();
        let result = engine.run(vec![row("BBB", 1, 42.0)]).unwrap();

        assert_eq!(result.len(), 1);
        let f = &result[0].features;
        assert_eq!(f.sma_10, None);
        assert_eq!(f.rsi_14, None);
        assert_eq!(f.percent_k, None);
        assert_eq!(f.percent_d, None);
        assert_eq!(f.daily_return, None);
        assert_eq!(f.ema_10, Some(42.0));
    }

    #[test]
    fn test_round_trip_preserves_row_identity() {
        // Interleaved tickers in non-canonical order
        let mut rows = aaa_panel();
        rows.insert(3, row("BBB", 2, 20.0));
        rows.insert(7, row("BBB", 1, 19.0));
        rows.push(row("BBB", 3, 21.0));

        let input_keys: BTreeSet<_> = rows.iter().map(PanelRow::key).collect();
        let input_len = rows.len();

        let engine = FeatureEngine::default();
        let result = engine.run(rows).unwrap();

        // No row gained or lost
        assert_eq!(result.len(), input_len);
        let output_keys: BTreeSet<_> = result.iter().map(|r| r.row.key()).collect();
        assert_eq!(output_keys, input_keys);

        // Canonical order: ticker ascending, date ascending
        let keys: Vec<_> = result.iter().map(|r| r.row.key()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_features_follow_the_row_not_the_position() {
        // BBB rises while AAA falls; if per-group results were glued back
        // positionally the short group's returns would land on AAA rows.
        let rows = vec![
            row("BBB", 1, 100.0),
            row("AAA", 1, 50.0),
            row("BBB", 2, 110.0),
            row("AAA", 2, 45.0),
        ];

        let engine = FeatureEngine::default();
        let result = engine.run(rows).unwrap();

        assert_eq!(result[0].row.ticker, "AAA");
        assert!((result[1].features.daily_return.unwrap() - (-0.1)).abs() < 1e-10); // 45/50
        assert!((result[3].features.daily_return.unwrap() - 0.1).abs() < 1e-10); // 110/100
    }

    #[test]
    fn test_duplicate_date_fails_run() {
        let rows = vec![row("AAA", 1, 10.0), row("AAA", 1, 11.0)];
        let engine = FeatureEngine::default();
        assert!(matches!(
            engine.run(rows),
            Err(EngineError::DuplicateDate { .. })
        ));
    }

    #[test]
    fn test_empty_panel_fails_run() {
        let engine = FeatureEngine::default();
        assert!(matches!(engine.run(vec![]), Err(EngineError::EmptyPanel)));
    }

    #[test]
    fn test_daily_returns_zero_prev_close() {
        let returns = daily_returns(&[0.0, 5.0, 10.0]);
        assert_eq!(returns[0], None);
        assert_eq!(returns[1], None);
        assert_eq!(returns[2], Some(1.0));
    }
}
