//! Lockfile parser
//!
//! Handles format detection, splitting a lockfile into package blocks and
//! turning those blocks (or legacy metadata lines) into `Record`s.

use std::collections::BTreeMap;

use crate::models::{LockfileFormat, Record};

/// Header of the legacy checksum table
const METADATA_HEADER: &str = "[metadata]";

/// Header of a package table in the current format
const PACKAGE_HEADER: &str = "[[package]]";

/// Prefix of a legacy checksum line (quoted key)
const CHECKSUM_KEY_PREFIX: &str = "\"checksum";

/// Minimum whitespace-separated tokens on a legacy checksum line
const CHECKSUM_LINE_TOKENS: usize = 6;

/// Key/value pairs parsed out of one package block
pub type KeyValues = BTreeMap<String, String>;

/// The body of one `[[package]]` table, header excluded
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawBlock<'a> {
    lines: Vec<&'a str>,
}

impl<'a> RawBlock<'a> {
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Decide which lockfile layout `text` uses.
///
/// A `[metadata]` header anywhere in the file means legacy, whatever else
/// the file contains.
pub fn detect_format(text: &str) -> LockfileFormat {
    if text.lines().any(is_metadata_header) {
        LockfileFormat::Legacy
    } else {
        LockfileFormat::Current
    }
}

fn is_metadata_header(line: &str) -> bool {
    line.trim_end() == METADATA_HEADER
}

fn is_package_header(line: &str) -> bool {
    line.trim() == PACKAGE_HEADER
}

/// Remove surrounding whitespace, then surrounding double quotes.
pub fn strip_token(s: &str) -> &str {
    s.trim().trim_matches('"')
}

/// Split current-format text into package blocks, in document order.
///
/// A block starts at a `[[package]]` header and runs through the following
/// non-blank lines. It ends at a blank line, at the next header, or at end
/// of input. A header with nothing after it yields an empty block.
pub fn package_blocks(text: &str) -> Vec<RawBlock<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<RawBlock<'_>> = None;

    for line in text.lines() {
        if is_package_header(line) {
            blocks.extend(current.take());
            current = Some(RawBlock::default());
            continue;
        }

        if line.trim().is_empty() {
            blocks.extend(current.take());
        } else if let Some(block) = current.as_mut() {
            block.lines.push(line);
        }
    }

    blocks.extend(current);
    blocks
}

/// Parse the `key = value` lines of a block.
///
/// Only the first `=` separates key from value. Lines without `=` are
/// ignored; a repeated key keeps its last value.
pub fn parse_block(block: &RawBlock<'_>) -> KeyValues {
    let mut parsed = KeyValues::new();
    for line in block.lines() {
        if let Some((key, value)) = line.split_once('=') {
            parsed.insert(strip_token(key).to_string(), strip_token(value).to_string());
        }
    }
    parsed
}

/// Build a record from a parsed block.
///
/// Returns `None` when `name` or `version` is missing or empty.
pub fn record_from_block(block: &RawBlock<'_>) -> Option<Record> {
    let mut fields = parse_block(block);
    let name = fields.remove("name").filter(|s| !s.is_empty())?;
    let version = fields.remove("version").filter(|s| !s.is_empty())?;
    let checksum = fields.remove("checksum");
    Some(Record::new(name, version, checksum))
}

/// Collect one record per checksum line of the legacy `[metadata]` table.
///
/// The table runs from its header to the next table header or end of
/// input. Lines that are not checksum lines are skipped. Without a
/// `[metadata]` table the result is empty.
pub fn metadata_records(text: &str) -> Vec<Record> {
    text.lines()
        .skip_while(|line| !is_metadata_header(line))
        .skip(1)
        .take_while(|line| !line.starts_with('['))
        .filter_map(parse_checksum_line)
        .collect()
}

/// Parse `"checksum <name> <version> (<source>) = <digest>"`.
fn parse_checksum_line(line: &str) -> Option<Record> {
    if !line.starts_with(CHECKSUM_KEY_PREFIX) {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().map(strip_token).collect();
    if tokens.len() < CHECKSUM_LINE_TOKENS {
        return None;
    }

    Some(Record::new(
        tokens[1],
        tokens[2],
        Some(tokens[5].to_string()),
    ))
}
