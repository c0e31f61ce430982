//! Moving average indicators.

use feature_core::traits::SeriesIndicator;

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values. Undefined until
/// the window fills.
#[derive(Debug, Clone)]
pub struct Sma {
    window: usize,
}

impl Sma {
    /// Create a new SMA with the specified window.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window must be greater than 0");
        Self { window }
    }
}

impl SeriesIndicator for Sma {
    type Output = Option<f64>;

    fn compute(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() < self.window {
            // Short-lived ticker: every value stays undefined
            return result;
        }

        let window_f64 = self.window as f64;

        // Initial sum
        let mut sum: f64 = data[..self.window].iter().sum();
        result[self.window - 1] = Some(sum / window_f64);

        // Sliding window
        for i in self.window..data.len() {
            sum = sum - data[i - self.window] + data[i];
            result[i] = Some(sum / window_f64);
        }

        result
    }

    fn min_history(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Gives more weight to recent prices using an exponential decay with
/// `alpha = 2 / (span + 1)`. Seeded with the first observation, so the
/// series is fully defined from the first row, unlike the rolling
/// indicators.
#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
    alpha: f64,
}

impl Ema {
    /// Create a new EMA with the specified span.
    pub fn new(span: usize) -> Self {
        assert!(span > 0, "Span must be greater than 0");
        let alpha = 2.0 / (span as f64 + 1.0);
        Self { span, alpha }
    }

    /// The smoothing factor.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl SeriesIndicator for Ema {
    type Output = f64;

    fn compute(&self, data: &[f64]) -> Vec<f64> {
        let mut result = Vec::with_capacity(data.len());
        if data.is_empty() {
            return result;
        }

        // EMA[0] = data[0]
        let mut ema = data[0];
        result.push(ema);

        let one_minus_alpha = 1.0 - self.alpha;
        for &price in &data[1..] {
            ema = price * self.alpha + ema * one_minus_alpha;
            result.push(ema);
        }

        result
    }

    fn min_history(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "EMA"
    }
}
