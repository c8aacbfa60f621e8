//! Errors that abort a pipeline run
//!
//! Row-level problems (blank names, unparseable years, empty role fields)
//! are never errors; they are skipped where they occur. Only conditions that
//! would leave a source missing from the output end up here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading sources or writing documents
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
