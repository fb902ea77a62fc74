//! Stanza layout configuration
//!
//! Built once per run: defaults, then `CARGO2PORT_*` environment
//! overrides, then command-line flags. The result is passed by reference
//! into the renderer.

use tracing::warn;

/// Default number of spaces before each crate line
pub const DEFAULT_INDENT: usize = 4;

/// Default width of the name + version column
pub const DEFAULT_FIELD_WIDTH: usize = 38;

/// Default number of spaces between version and checksum
pub const DEFAULT_SPACER_WIDTH: usize = 2;

/// Environment variable overriding the indent
pub const ENV_INDENT: &str = "CARGO2PORT_INDENT";

/// Environment variable overriding the field width
pub const ENV_WIDTH: &str = "CARGO2PORT_WIDTH";

/// Column layout of the rendered stanza
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StanzaConfig {
    /// Leading spaces on every crate line
    pub indent: usize,
    /// Target width of name + gap + version
    pub field_width: usize,
    /// Spaces between version and checksum when the field does not overflow
    pub spacer_width: usize,
}

impl Default for StanzaConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            field_width: DEFAULT_FIELD_WIDTH,
            spacer_width: DEFAULT_SPACER_WIDTH,
        }
    }
}

impl StanzaConfig {
    /// Apply environment variable overrides (CARGO2PORT_* prefix)
    ///
    /// `get_env` is injected so callers decide where values come from.
    /// Values that are not non-negative integers are ignored.
    pub fn with_env_overrides(mut self, get_env: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(indent) = parse_env_count(&get_env, ENV_INDENT) {
            self.indent = indent;
        }
        if let Some(width) = parse_env_count(&get_env, ENV_WIDTH) {
            self.field_width = width;
        }
        self
    }

    /// Apply explicit overrides, typically from command-line flags
    pub fn with_overrides(mut self, indent: Option<usize>, field_width: Option<usize>) -> Self {
        if let Some(indent) = indent {
            self.indent = indent;
        }
        if let Some(width) = field_width {
            self.field_width = width;
        }
        self
    }
}

fn parse_env_count(get_env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let raw = get_env(key)?;
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {key}={raw:?}: expected a non-negative integer");
            None
        }
    }
}
