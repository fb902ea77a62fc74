//! Error types for cargo2port
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cargo2port operations
pub type Cargo2PortResult<T> = Result<T, Cargo2PortError>;

/// Main error type for cargo2port operations
#[derive(Error, Debug)]
pub enum Cargo2PortError {
    /// The lockfile yielded no checksummed package records
    #[error("No package definitions found: either not a Cargo.lock file, or file is empty.")]
    NoPackages,

    /// The lockfile could not be read
    #[error("can't open '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Cargo2PortError {
    /// Process exit status associated with this error.
    ///
    /// Unreadable input mirrors the argument-parsing layer (2); an empty
    /// result is the one application-level failure (1).
    pub fn exit_code(&self) -> u8 {
        match self {
            Cargo2PortError::NoPackages => 1,
            Cargo2PortError::Io { .. } => 2,
            Cargo2PortError::Json(_) => 1,
        }
    }
}
