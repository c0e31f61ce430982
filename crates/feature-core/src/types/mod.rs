//! Core data types for the feature engineering pipeline.

mod feature;
mod panel;

pub use feature::{FeatureRow, FeatureSet};
pub use panel::{PanelRow, RowKey, TickerGroup};
