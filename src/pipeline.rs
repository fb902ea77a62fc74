//! Lockfile → stanza pipeline
//!
//! Detects the lockfile format, picks the matching extractor, collects
//! records and renders them. Nothing here touches process state; the
//! binary decides how to print results and exit.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::StanzaConfig;
use crate::error::{Cargo2PortError, Cargo2PortResult};
use crate::models::{LockfileFormat, Record};
use crate::parser::{detect_format, metadata_records, package_blocks, record_from_block};
use crate::stanza::render_stanza;

/// Output produced by `run`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// The Portfile `cargo.crates` stanza
    #[default]
    Stanza,
    /// One JSON object per renderable record, one per line
    Json,
}

/// Source of records for one lockfile format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// Reads checksum lines from the `[metadata]` table
    Legacy,
    /// Reads `[[package]]` tables
    Current,
}

/// Records pulled from a lockfile, plus what had to be dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOutcome {
    pub format: LockfileFormat,
    pub records: Vec<Record>,
    /// Package blocks missing `name` or `version`
    pub skipped: usize,
}

impl Extractor {
    pub fn for_format(format: LockfileFormat) -> Self {
        match format {
            LockfileFormat::Legacy => Extractor::Legacy,
            LockfileFormat::Current => Extractor::Current,
        }
    }

    pub fn format(self) -> LockfileFormat {
        match self {
            Extractor::Legacy => LockfileFormat::Legacy,
            Extractor::Current => LockfileFormat::Current,
        }
    }

    /// Extract records in document order.
    ///
    /// Malformed package blocks are skipped and logged.
    pub fn records(self, text: &str) -> ExtractOutcome {
        let (records, skipped) = match self {
            Extractor::Legacy => (metadata_records(text), 0),
            Extractor::Current => {
                let blocks = package_blocks(text);
                debug!(blocks = blocks.len(), "found package blocks");

                let mut records = Vec::with_capacity(blocks.len());
                let mut skipped = 0;
                for (index, block) in blocks.iter().enumerate() {
                    match record_from_block(block) {
                        Some(record) => records.push(record),
                        None => {
                            warn!(block = index, "skipping package block without name or version");
                            skipped += 1;
                        }
                    }
                }
                (records, skipped)
            }
        };

        ExtractOutcome {
            format: self.format(),
            records,
            skipped,
        }
    }
}

/// Detect the format of `text` and extract its records
pub fn extract_records(text: &str) -> ExtractOutcome {
    let format = detect_format(text);
    debug!(%format, "detected lockfile format");

    let outcome = Extractor::for_format(format).records(text);
    debug!(
        records = outcome.records.len(),
        renderable = outcome.records.iter().filter(|r| r.is_renderable()).count(),
        "extracted records"
    );
    outcome
}

/// Render records as newline-delimited JSON, renderable records only
pub fn render_json(records: &[Record]) -> Cargo2PortResult<String> {
    let lines = records
        .iter()
        .filter(|r| r.is_renderable())
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

/// Turn lockfile text into the requested output.
///
/// Fails with `NoPackages` when no record carries a checksum, since the
/// stanza would otherwise end on a dangling continuation marker.
pub fn run(text: &str, config: &StanzaConfig, mode: OutputMode) -> Cargo2PortResult<String> {
    let outcome = extract_records(text);

    if !outcome.records.iter().any(Record::is_renderable) {
        return Err(Cargo2PortError::NoPackages);
    }

    match mode {
        OutputMode::Stanza => Ok(render_stanza(&outcome.records, config)),
        OutputMode::Json => render_json(&outcome.records),
    }
}

/// Read `path` and run it through the pipeline
pub fn run_file(path: &Path, config: &StanzaConfig, mode: OutputMode) -> Cargo2PortResult<String> {
    let text = std::fs::read_to_string(path).map_err(|source| Cargo2PortError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    run(&text, config, mode)
}
