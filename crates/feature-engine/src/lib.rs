//! Feature computation engine.
//!
//! Splits a multi-ticker panel into date-sorted per-ticker groups, runs
//! the indicator engines over each group independently, and reassembles
//! the results into one enriched table aligned by `(ticker, date)` key.

pub mod assemble;
pub mod engine;
pub mod partition;

pub use assemble::FeatureAssembler;
pub use engine::{FeatureEngine, FeatureParams};
pub use partition::partition;
