//! Error types for Tribune Core.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Tribune operations.
#[derive(Debug, Error)]
pub enum TribuneError {
    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configuration file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration file is not valid TOML for [`TribuneConfig`](crate::TribuneConfig).
    #[error("Invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Pool error passthrough.
    #[error("Pool error: {0}")]
    Pool(#[from] tribune_pool::PoolError),

    /// Debate error passthrough.
    #[error("Debate failed: {0}")]
    Debate(#[from] tribune_council::DebateError),
}
