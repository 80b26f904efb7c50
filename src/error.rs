//! Error types.
//!
//! Every fallible operation in the crate returns [`Result`]. Nothing is
//! retried or recovered internally; errors surface to the caller as-is.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading reports, loading configuration, or
/// writing the JUnit output file.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing the XML report to the configured output path failed.
    #[error("failed to write report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an input report or config file failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The lint results could not be decoded.
    #[error("invalid lint report: {0}")]
    InvalidReport(#[from] serde_json::Error),

    /// The config file is missing or is not valid TOML.
    #[error("invalid config {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
