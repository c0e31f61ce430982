//! Core types and traits for the feature engineering pipeline.
//!
//! This crate provides the foundational building blocks including:
//! - Panel data types (PanelRow, RowKey, TickerGroup)
//! - Engineered feature types (FeatureSet, FeatureRow)
//! - Core traits for indicators and panel sources

pub mod types;
pub mod traits;
pub mod error;

pub use error::{FeatureError, FeatureResult};
pub use types::*;
pub use traits::*;
