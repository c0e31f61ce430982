//! Technical indicator engines.
//!
//! This crate provides the per-group computations behind the engineered
//! feature columns:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD, Stochastic)
//! - Volatility indicators (rolling standard deviation, Bollinger Bands)
//!
//! Every indicator returns one output per input row, aligned by index
//! within a date-sorted group. Values whose lookback window has not yet
//! filled are `None`, never NaN.

pub mod momentum;
pub mod moving_average;
pub mod volatility;

pub use momentum::{Macd, MacdOutput, Rsi, Stochastic, StochasticOutput};
pub use moving_average::{Ema, Sma};
pub use volatility::{BollingerBands, BollingerOutput, RollingStd};
