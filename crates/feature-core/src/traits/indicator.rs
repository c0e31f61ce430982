//! Indicator trait definitions.

/// Trait for indicators computed from a single price series.
///
/// The output is aligned one-to-one with the input: `result[i]` is the
/// indicator value at row `i` of the group. Indicators with a lookback
/// requirement use an `Option` output and return `None` until the window
/// has filled; indicators defined from the first observation (EMA, MACD)
/// use a plain output type. Alignment by index within a group is safe
/// because groups are date-sorted; alignment across groups is the
/// assembler's job and is done by key.
pub trait SeriesIndicator: Send + Sync {
    /// The per-row output type.
    type Output;

    /// Compute indicator values for the given series.
    ///
    /// # Arguments
    /// * `data` - Input series (typically close prices), oldest first
    ///
    /// # Returns
    /// One output per input value.
    fn compute(&self, data: &[f64]) -> Vec<Self::Output>;

    /// Number of observations before the first defined value.
    fn min_history(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

/// Trait for indicators that need the high/low range as well as close.
///
/// Same alignment contract as [`SeriesIndicator`]: one output per input
/// row. The three slices must be the same length.
pub trait RangeIndicator: Send + Sync {
    /// The per-row output type.
    type Output;

    /// Compute indicator values from high/low/close series.
    fn compute(&self, high: &[f64], low: &[f64], close: &[f64]) -> Vec<Self::Output>;

    /// Number of observations before the first defined value.
    fn min_history(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}
