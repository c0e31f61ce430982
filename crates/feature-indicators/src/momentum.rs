//! Momentum indicators.

use feature_core::traits::{RangeIndicator, SeriesIndicator};
use serde::{Deserialize, Serialize};

use crate::moving_average::Ema;

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes from simple
/// rolling means of average gain and average loss. Undefined for the
/// first `period` rows of a group (the delta series starts one row late).
///
/// Zero-division policy: when the trailing losses average to zero and the
/// gains do not, RSI is 100; when both average to zero (flat series),
/// RSI is undefined.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// The common period is 14.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    fn rsi_value(avg_gain: f64, avg_loss: f64) -> Option<f64> {
        if avg_loss == 0.0 {
            if avg_gain > 0.0 {
                Some(100.0)
            } else {
                None
            }
        } else {
            Some(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
        }
    }
}

impl SeriesIndicator for Rsi {
    type Output = Option<f64>;

    fn compute(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() <= self.period {
            return result;
        }

        // Price changes; gains[j] and losses[j] belong to row j + 1
        let mut gains = Vec::with_capacity(data.len() - 1);
        let mut losses = Vec::with_capacity(data.len() - 1);

        for i in 1..data.len() {
            let change = data[i] - data[i - 1];
            if change > 0.0 {
                gains.push(change);
                losses.push(0.0);
            } else {
                gains.push(0.0);
                losses.push(-change);
            }
        }

        let period_f64 = self.period as f64;

        let mut gain_sum: f64 = gains[..self.period].iter().sum();
        let mut loss_sum: f64 = losses[..self.period].iter().sum();
        result[self.period] = Self::rsi_value(gain_sum / period_f64, loss_sum / period_f64);

        for j in self.period..gains.len() {
            gain_sum += gains[j] - gains[j - self.period];
            loss_sum += losses[j] - losses[j - self.period];
            result[j + 1] = Self::rsi_value(gain_sum / period_f64, loss_sum / period_f64);
        }

        result
    }

    fn min_history(&self) -> usize {
        self.period + 1
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// MACD (Moving Average Convergence Divergence) output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of MACD)
    pub signal: f64,
}

/// MACD indicator.
///
/// Difference of two EMAs with a signal EMA of that difference. Because
/// the underlying EMAs seed from the first observation, MACD and its
/// signal are fully defined from row 0 of a group, unlike the rolling
/// indicators.
#[derive(Debug, Clone)]
pub struct Macd {
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
}

impl Macd {
    /// Create a new MACD with default spans (12, 26, 9).
    pub fn new() -> Self {
        Self::with_spans(12, 26, 9)
    }

    /// Create a MACD with custom spans.
    pub fn with_spans(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast > 0 && slow > 0 && signal > 0);
        assert!(fast < slow, "Fast span must be less than slow span");
        Self {
            fast_span: fast,
            slow_span: slow,
            signal_span: signal,
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesIndicator for Macd {
    type Output = MacdOutput;

    fn compute(&self, data: &[f64]) -> Vec<MacdOutput> {
        if data.is_empty() {
            return vec![];
        }

        let fast_ema = Ema::new(self.fast_span).compute(data);
        let slow_ema = Ema::new(self.slow_span).compute(data);

        let macd_line: Vec<f64> = fast_ema
            .iter()
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        let signal_line = Ema::new(self.signal_span).compute(&macd_line);

        macd_line
            .iter()
            .zip(signal_line.iter())
            .map(|(&macd, &signal)| MacdOutput { macd, signal })
            .collect()
    }

    fn min_history(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

/// Stochastic oscillator output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StochasticOutput {
    /// %K (fast stochastic); `None` until the window fills or when the
    /// high/low range over the window is zero
    pub k: Option<f64>,
    /// %D (mean of %K); `None` wherever its %K window is not fully defined
    pub d: Option<f64>,
}

/// Stochastic oscillator.
///
/// Normalized position of close within the rolling high/low range. A
/// zero range (flat high/low over the window) yields an undefined %K at
/// that row, never a division artifact.
#[derive(Debug, Clone)]
pub struct Stochastic {
    k_period: usize,
    d_period: usize,
}

impl Stochastic {
    /// Create a new stochastic oscillator with default periods (14, 3).
    pub fn new() -> Self {
        Self::with_periods(14, 3)
    }

    /// Create with custom periods.
    pub fn with_periods(k_period: usize, d_period: usize) -> Self {
        assert!(k_period > 0 && d_period > 0);
        Self { k_period, d_period }
    }
}

impl Default for Stochastic {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeIndicator for Stochastic {
    type Output = StochasticOutput;

    fn compute(&self, high: &[f64], low: &[f64], close: &[f64]) -> Vec<StochasticOutput> {
        let len = high.len().min(low.len()).min(close.len());
        let mut k_values: Vec<Option<f64>> = vec![None; len];

        for i in (self.k_period.saturating_sub(1))..len {
            let start = i + 1 - self.k_period;
            let highest = high[start..=i]
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            let lowest = low[start..=i].iter().copied().fold(f64::INFINITY, f64::min);

            let range = highest - lowest;
            if range != 0.0 {
                k_values[i] = Some((close[i] - lowest) / range * 100.0);
            }
        }

        let d_period_f64 = self.d_period as f64;
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            let d = if i + 1 >= self.d_period {
                let window = &k_values[i + 1 - self.d_period..=i];
                if window.iter().all(Option::is_some) {
                    Some(window.iter().copied().flatten().sum::<f64>() / d_period_f64)
                } else {
                    None
                }
            } else {
                None
            };

            result.push(StochasticOutput { k: k_values[i], d });
        }

        result
    }

    fn min_history(&self) -> usize {
        self.k_period
    }

    fn name(&self) -> &str {
        "Stochastic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_bounds() {
        let rsi = Rsi::new(14);
        let data: Vec<f64> = (0..40)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
            .collect();

        let result = rsi.compute(&data);
        assert_eq!(result.len(), 40);
        assert!(result[..14].iter().all(Option::is_none));

        for value in result[14..].iter().map(|v| v.unwrap()) {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_rsi_all_gains() {
        let rsi = Rsi::new(5);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let result = rsi.compute(&data);

        // No losses over the trailing window: RSI pegs at 100
        assert!((result[5].unwrap() - 100.0).abs() < 1e-10);
        assert!((result[6].unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_all_losses() {
        let rsi = Rsi::new(5);
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let result = rsi.compute(&data);

        assert!(result[5].unwrap().abs() < 1e-10);
    }

    #[test]
    fn test_rsi_flat_series_undefined() {
        let rsi = Rsi::new(5);
        let data = vec![3.0; 10];
        let result = rsi.compute(&data);

        // No gains and no losses: momentum is undefined, not a NaN
        assert!(result.iter().all(Option::is_none));
    }

    #[test]
    fn test_rsi_simple_mean_value() {
        let rsi = Rsi::new(2);
        // deltas: +2, -1, +1
        let data = vec![10.0, 12.0, 11.0, 12.0];
        let result = rsi.compute(&data);

        // Row 2: avg gain (2+0)/2 = 1, avg loss (0+1)/2 = 0.5
        // RS = 2, RSI = 100 - 100/3
        assert!((result[2].unwrap() - (100.0 - 100.0 / 3.0)).abs() < 1e-10);
        // Row 3: avg gain (0+1)/2 = 0.5, avg loss (1+0)/2 = 0.5, RSI = 50
        assert!((result[3].unwrap() - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_macd_equals_ema_difference_everywhere() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..50)
            .map(|i| 100.0 + (i as f64 * 0.2).cos() * 8.0)
            .collect();

        let result = macd.compute(&data);
        assert_eq!(result.len(), data.len());

        let fast = Ema::new(12).compute(&data);
        let slow = Ema::new(26).compute(&data);
        for i in 0..data.len() {
            assert!((result[i].macd - (fast[i] - slow[i])).abs() < 1e-10);
        }
    }

    #[test]
    fn test_macd_defined_from_first_row() {
        let macd = Macd::new();
        let result = macd.compute(&[100.0]);

        // Both EMAs start at close[0], so MACD and signal start at 0
        assert_eq!(result.len(), 1);
        assert!(result[0].macd.abs() < 1e-10);
        assert!(result[0].signal.abs() < 1e-10);
    }

    #[test]
    fn test_macd_uptrend_positive() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let result = macd.compute(&data);

        assert!(result.last().unwrap().macd > 0.0);
    }

    #[test]
    fn test_stochastic_bounds_and_prefix() {
        let stoch = Stochastic::new();
        let high: Vec<f64> = (0..30).map(|i| 105.0 + i as f64).collect();
        let low: Vec<f64> = (0..30).map(|i| 95.0 + i as f64).collect();
        let close: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();

        let result = stoch.compute(&high, &low, &close);
        assert_eq!(result.len(), 30);
        assert!(result[..13].iter().all(|o| o.k.is_none()));
        // %D needs a full window of defined %K: first at index 15
        assert!(result[..15].iter().all(|o| o.d.is_none()));
        assert!(result[15].d.is_some());

        for output in &result[15..] {
            let k = output.k.unwrap();
            let d = output.d.unwrap();
            assert!((0.0..=100.0).contains(&k));
            assert!((0.0..=100.0).contains(&d));
        }
    }

    #[test]
    fn test_stochastic_close_at_high() {
        let stoch = Stochastic::with_periods(5, 3);
        let high = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0];
        let low = vec![5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
        let close = high.clone();

        let result = stoch.compute(&high, &low, &close);
        assert!((result.last().unwrap().k.unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_stochastic_zero_range_undefined() {
        let stoch = Stochastic::with_periods(3, 2);
        // Flat high/low over every window
        let high = vec![10.0; 6];
        let low = vec![10.0; 6];
        let close = vec![10.0; 6];

        let result = stoch.compute(&high, &low, &close);
        assert!(result.iter().all(|o| o.k.is_none() && o.d.is_none()));
    }

    #[test]
    fn test_stochastic_hole_propagates_into_d() {
        let stoch = Stochastic::with_periods(2, 2);
        // Window [2,3] is flat (range 0), every other window has range
        let high = vec![10.0, 12.0, 11.0, 11.0, 13.0, 14.0];
        let low = vec![9.0, 9.0, 11.0, 11.0, 11.0, 12.0];
        let close = vec![9.5, 11.0, 11.0, 11.0, 12.0, 13.0];

        let result = stoch.compute(&high, &low, &close);
        assert!(result[3].k.is_none());
        // %D windows covering the hole stay undefined
        assert!(result[3].d.is_none());
        assert!(result[4].d.is_none());
        assert!(result[5].d.is_some());
    }
}
