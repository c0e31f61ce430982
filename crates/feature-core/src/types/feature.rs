//! Engineered feature types.

use serde::{Deserialize, Serialize};

use super::PanelRow;

/// Engineered indicator columns for one row.
///
/// `None` marks an undefined value: a window that has not yet filled, or a
/// numeric edge case resolved by policy (zero-range stochastic window, flat
/// RSI series). Undefined is never encoded as NaN or zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// 10-day simple moving average of close
    pub sma_10: Option<f64>,
    /// 10-day exponential moving average of close
    pub ema_10: Option<f64>,
    /// Bollinger middle band (equals the SMA)
    pub bb_middle: Option<f64>,
    /// Bollinger upper band (middle + 2 std)
    pub bb_upper: Option<f64>,
    /// Bollinger lower band (middle - 2 std)
    pub bb_lower: Option<f64>,
    /// One-day fractional return of close
    pub daily_return: Option<f64>,
    /// 14-day relative strength index
    pub rsi_14: Option<f64>,
    /// MACD line (12/26 EMA difference)
    pub macd: Option<f64>,
    /// Signal line (9-day EMA of MACD)
    pub signal_line: Option<f64>,
    /// Stochastic %K (14-day)
    pub percent_k: Option<f64>,
    /// Stochastic %D (3-day mean of %K)
    pub percent_d: Option<f64>,
}

/// An input row together with its engineered features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// The original panel row
    pub row: PanelRow,
    /// The engineered columns
    pub features: FeatureSet,
}

impl FeatureRow {
    /// Create a feature row.
    pub fn new(row: PanelRow, features: FeatureSet) -> Self {
        Self { row, features }
    }
}
