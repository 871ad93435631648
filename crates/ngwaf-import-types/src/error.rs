//! Error types for the import system

use std::path::PathBuf;

use thiserror::Error;

use crate::kind::ResourceKind;

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Errors that can occur while building an import plan
#[derive(Error, Debug)]
pub enum ImportError {
    /// No usable state snapshot (absent, or holding no resource ids)
    #[error("State not found: {0}")]
    NotFound(String),

    /// State snapshot exists but is not valid state data
    #[error("Failed to parse state snapshot {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    /// A single listing call against the control plane failed
    #[error("Listing {kind} in scope {scope} failed: {reason}")]
    ListingFailure {
        kind: ResourceKind,
        scope: String,
        reason: String,
    },

    /// The import-plan document (or a scaffold file) could not be written
    #[error("Failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Run configuration is unusable (e.g. an empty corp or site name)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ImportError {
    /// Whether the run can continue after this error
    ///
    /// Write failures and invalid configuration abort a run; everything else
    /// downgrades to a warning.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ImportError::WriteFailure { .. } | ImportError::InvalidConfiguration(_)
        )
    }
}
