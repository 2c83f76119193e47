//! Error types.
//!
//! Combobox operations themselves are total; errors only arise while loading
//! configuration.

use thiserror::Error;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid locale tag: {0:?}")]
    InvalidLocale(String),
    #[error("options parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("options read error: {0}")]
    Io(#[from] std::io::Error),
}
