//! cargo2port - Portfile stanza generator for Cargo lockfiles
//!
//! Reads a `Cargo.lock` (legacy `[metadata]` layout or current
//! `[[package]]` layout) and renders the MacPorts `cargo.crates` stanza
//! listing every checksummed crate.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod stanza;

// Re-exports for convenience
pub use config::StanzaConfig;
pub use error::{Cargo2PortError, Cargo2PortResult};
pub use models::{LockfileFormat, Record};
pub use parser::detect_format;
pub use pipeline::{extract_records, run, run_file, ExtractOutcome, Extractor, OutputMode};
pub use stanza::{render_line, render_stanza};
