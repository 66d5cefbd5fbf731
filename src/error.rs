//! Error types for margin configuration
//!
//! Layout computation itself never fails; only runtime tuning of the
//! margin configuration can be rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Key path does not name a configuration field
    #[error("Unknown margin config key: {0}")]
    UnknownKey(String),

    /// Key path names a group, not a numeric field
    #[error("Margin config key is not numeric: {0}")]
    NotNumeric(String),

    /// NaN or infinite override value
    #[error("Margin config value for {path} must be finite, got {value}")]
    NonFinite { path: String, value: f64 },

    /// JSON preset could not be parsed into a configuration
    #[error("Invalid margin config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        LayoutError::InvalidConfig(err.to_string())
    }
}
