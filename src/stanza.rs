//! Portfile `cargo.crates` stanza rendering

use crate::config::StanzaConfig;
use crate::models::Record;

/// Portfile field the stanza declares
pub const STANZA_KEYWORD: &str = "cargo.crates";

/// Line continuation marker
pub const CONTINUATION: &str = "\\";

/// Render one crate line without its continuation marker.
///
/// Returns `None` for records without a checksum. When name and version
/// together reach the field width, the gap collapses to one space and the
/// spacer before the checksum loses one space.
pub fn render_line(record: &Record, config: &StanzaConfig) -> Option<String> {
    let checksum = record.checksum()?;
    let name = record.name();
    let version = record.version();

    let used = name.chars().count() + version.chars().count();
    let (gap, spacer) = if used < config.field_width {
        (config.field_width - used, config.spacer_width)
    } else {
        (1, config.spacer_width.saturating_sub(1))
    };

    Some(format!(
        "{indent}{name}{gap}{version}{spacer}{checksum}",
        indent = " ".repeat(config.indent),
        gap = " ".repeat(gap),
        spacer = " ".repeat(spacer),
    ))
}

/// Render the full stanza for `records`, in order.
///
/// Checksum-less records are skipped. Every emitted crate line except the
/// last one ends with ` \`. No trailing newline is added.
pub fn render_stanza(records: &[Record], config: &StanzaConfig) -> String {
    let lines: Vec<String> = records
        .iter()
        .filter_map(|record| render_line(record, config))
        .collect();

    let mut output = Vec::with_capacity(lines.len() + 1);
    output.push(format!("{STANZA_KEYWORD} {CONTINUATION}"));

    let last = lines.len().saturating_sub(1);
    for (i, line) in lines.into_iter().enumerate() {
        if i == last {
            output.push(line);
        } else {
            output.push(format!("{line} {CONTINUATION}"));
        }
    }

    output.join("\n")
}
