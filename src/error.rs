//! Crate-level error types.
//!
//! The chart and series operations never fail; empty input and degenerate
//! ranges have defined fallbacks. [`StockscopeError`] covers the fallible
//! edges around them (configuration, universe files, JSON output) so callers
//! can still use the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StockscopeError>;

/// Top-level error type returned by fallible public APIs.
#[derive(Debug, thiserror::Error)]
pub enum StockscopeError {
    /// A configuration value was missing, malformed, or out of range.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a file or writing output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
