use std::path::PathBuf;

use combobox::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid options: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Failed to read items from {path}: {source}")]
    Items {
        path: PathBuf,
        source: std::io::Error,
    },
}
