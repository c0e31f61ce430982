//! Volatility indicators.

use feature_core::traits::SeriesIndicator;
use serde::{Deserialize, Serialize};

/// Rolling standard deviation.
///
/// Sample definition (n-1 divisor). Shares its window with the SMA used
/// for the Bollinger middle band so the bands stay self-consistent.
#[derive(Debug, Clone)]
pub struct RollingStd {
    window: usize,
}

impl RollingStd {
    /// Create a new rolling standard deviation over the given window.
    pub fn new(window: usize) -> Self {
        assert!(window > 1, "Window must be greater than 1");
        Self { window }
    }
}

impl SeriesIndicator for RollingStd {
    type Output = Option<f64>;

    fn compute(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() < self.window {
            return result;
        }

        let window_f64 = self.window as f64;
        for (i, window) in data.windows(self.window).enumerate() {
            let mean: f64 = window.iter().sum::<f64>() / window_f64;
            let variance: f64 =
                window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (window_f64 - 1.0);
            result[i + self.window - 1] = Some(variance.sqrt());
        }

        result
    }

    fn min_history(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "RollingStd"
    }
}

/// Bollinger Bands output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerOutput {
    /// Middle band (SMA)
    pub middle: f64,
    /// Upper band (middle + multiplier * std)
    pub upper: f64,
    /// Lower band (middle - multiplier * std)
    pub lower: f64,
}

/// Bollinger Bands.
///
/// A middle band (SMA) with upper and lower bands at a specified number
/// of rolling standard deviations. Undefined until the window fills.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    window: usize,
    multiplier: f64,
}

impl BollingerBands {
    /// Create Bollinger Bands with the given window and band multiplier.
    pub fn new(window: usize, multiplier: f64) -> Self {
        assert!(window > 1, "Window must be greater than 1");
        assert!(multiplier > 0.0, "Multiplier must be positive");
        Self { window, multiplier }
    }
}

impl SeriesIndicator for BollingerBands {
    type Output = Option<BollingerOutput>;

    fn compute(&self, data: &[f64]) -> Vec<Option<BollingerOutput>> {
        let mut result = vec![None; data.len()];
        if data.len() < self.window {
            return result;
        }

        let window_f64 = self.window as f64;
        for (i, window) in data.windows(self.window).enumerate() {
            let mean: f64 = window.iter().sum::<f64>() / window_f64;
            let variance: f64 =
                window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (window_f64 - 1.0);
            let std_dev = variance.sqrt();

            result[i + self.window - 1] = Some(BollingerOutput {
                middle: mean,
                upper: mean + self.multiplier * std_dev,
                lower: mean - self.multiplier * std_dev,
            });
        }

        result
    }

    fn min_history(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }
}
