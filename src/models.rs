//! Core data models for cargo2port
//!
//! - `Record`: one package pinned by the lockfile
//! - `LockfileFormat`: which of the two lockfile layouts a file uses

use std::fmt;

use serde::Serialize;

/// Lockfile layout, decided by `parser::detect_format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockfileFormat {
    /// Checksums live in a trailing `[metadata]` table
    Legacy,
    /// Checksums live inside each `[[package]]` table
    Current,
}

impl fmt::Display for LockfileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockfileFormat::Legacy => f.write_str("legacy"),
            LockfileFormat::Current => f.write_str("current"),
        }
    }
}

/// A single package entry: name, version and optional checksum.
///
/// Immutable once built. Records without a checksum are kept so callers
/// can count them, but they never produce a stanza line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum: Option<String>,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        checksum: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            checksum,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_deref()
    }

    /// Whether this record contributes a line to the stanza
    pub fn is_renderable(&self) -> bool {
        self.checksum.is_some()
    }
}
