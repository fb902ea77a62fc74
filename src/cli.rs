//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::StanzaConfig;
use crate::pipeline::OutputMode;

/// Generate a cargo.crates Portfile stanza for MacPorts from a Cargo.lock file
#[derive(Parser, Debug)]
#[command(name = "cargo2port")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the Cargo.lock file
    #[arg(default_value = "Cargo.lock")]
    pub lockfile: PathBuf,

    /// Number of spaces to indent by [default: 4]
    #[arg(short, long, value_name = "COUNT")]
    pub indent: Option<usize>,

    /// How many characters and spaces wide the name/version field should be [default: 38]
    #[arg(short, long, value_name = "COUNT")]
    pub width: Option<usize>,

    /// Print one JSON object per crate instead of the stanza
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Layout config: defaults, then `get_env` overrides, then flags
    pub fn stanza_config(&self, get_env: impl Fn(&str) -> Option<String>) -> StanzaConfig {
        StanzaConfig::default()
            .with_env_overrides(get_env)
            .with_overrides(self.indent, self.width)
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Stanza
        }
    }

    /// Default log filter for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
