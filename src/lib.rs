//! Mock market series and candlestick chart geometry for stock dashboards.
//!
//! Generates random-walk daily OHLCV bars and synthesized price predictions,
//! maps them into drawable chart primitives, and computes the derived values
//! the dashboard cards show (top movers, search, insights, formatting).

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod generator;
pub mod insights;
pub mod leaderboard;
pub mod models;
pub mod svg;

pub use error::{Result, StockscopeError};
