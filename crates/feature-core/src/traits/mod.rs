//! Core traits for the feature engineering pipeline.

mod indicator;
mod source;

pub use indicator::{RangeIndicator, SeriesIndicator};
pub use source::PanelSource;
