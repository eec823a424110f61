//! The sectioned text grammar and the headerless-file bridge.
//!
//! Grammar, line by line:
//! ```text
//! [section]          header; opens a section
//! key = value        entry; whitespace around `=` is insignificant
//! # comment          ignored (also `;`)
//!                    blank lines ignored
//! ```
//!
//! The daemon's own config file omits the header entirely.  To still parse
//! it with this grammar, [`parse_lenient`] makes an explicit two-step
//! attempt: strict parse first, and only when that fails with
//! [`FormatError::MissingSectionHeader`] a second parse with the synthetic
//! header [`SYNTHETIC_SECTION`] prepended.  Every other failure surfaces
//! unretried, so a genuinely malformed file is never silently "fixed".
//!
//! [`render`] is the inverse: it always renders a full sectioned document
//! and then removes exactly the synthetic header line when the label says
//! the original file was headerless.

use thiserror::Error;
use tracing::debug;

use crate::config::document::{ConfigDocument, SectionLabel, SYNTHETIC_SECTION};

/// Errors produced while parsing text in the sectioned grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// An entry line appeared before any `[section]` header.  This is the
    /// one failure the lenient parse path recovers from.
    #[error("line {line}: option before any section header")]
    MissingSectionHeader { line: usize },

    /// A line that is neither blank, comment, header, nor `key = value`.
    #[error("line {line}: expected `key = value` or `[section]`, got `{content}`")]
    MalformedLine { line: usize, content: String },

    /// The same section name was declared twice.
    #[error("line {line}: duplicate section `{name}`")]
    DuplicateSection { line: usize, name: String },
}

/// One parsed section: its header name and entries in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub entries: ConfigDocument,
}

/// Parses `text` strictly against the sectioned grammar.
///
/// Duplicate keys within one section keep the last value, matching the
/// daemon's own reading of its file.  An empty input (or one holding only
/// blanks and comments) parses to zero sections.
///
/// # Errors
///
/// [`FormatError::MissingSectionHeader`] when an entry precedes every
/// header, [`FormatError::DuplicateSection`] when a header name repeats,
/// [`FormatError::MalformedLine`] for anything else the grammar rejects.
pub fn parse_sectioned(text: &str) -> Result<Vec<Section>, FormatError> {
    let mut sections: Vec<Section> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(name) = header_name(trimmed) {
            if name.is_empty() {
                return Err(FormatError::MalformedLine {
                    line,
                    content: trimmed.to_string(),
                });
            }
            if sections.iter().any(|s| s.name == name) {
                return Err(FormatError::DuplicateSection {
                    line,
                    name: name.to_string(),
                });
            }
            sections.push(Section {
                name: name.to_string(),
                entries: ConfigDocument::new(),
            });
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(FormatError::MalformedLine {
                line,
                content: trimmed.to_string(),
            });
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || key.starts_with('[') {
            return Err(FormatError::MalformedLine {
                line,
                content: trimmed.to_string(),
            });
        }

        match sections.last_mut() {
            Some(section) => section.entries.set(key, value),
            None => return Err(FormatError::MissingSectionHeader { line }),
        }
    }

    Ok(sections)
}

/// Parses `text` tolerantly: first as-is, then — only when the strict
/// parse failed because no header precedes the first option — once more
/// with the synthetic header prepended.
///
/// The returned flag records whether the synthetic header was injected;
/// the save path needs it to know the header line must be stripped again.
///
/// # Errors
///
/// Any failure other than the missing header is returned unretried.
pub fn parse_lenient(text: &str) -> Result<(Vec<Section>, bool), FormatError> {
    match parse_sectioned(text) {
        Ok(sections) => Ok((sections, false)),
        Err(FormatError::MissingSectionHeader { .. }) => {
            debug!("no section header in config text; retrying with synthetic header");
            let injected = format!("[{SYNTHETIC_SECTION}]\n{text}");
            parse_sectioned(&injected).map(|sections| (sections, true))
        }
        Err(err) => Err(err),
    }
}

/// Renders `document` under `label` in the sectioned grammar.
///
/// Entries appear in insertion order as `key = value` lines.  When `label`
/// is synthetic, exactly the line equal to the synthetic header is removed
/// again so the output matches the headerless on-disk convention.
///
/// Values are written verbatim.  Characters significant to the grammar
/// (a leading `[`, an embedded newline) are not escaped and will not
/// round-trip; the file format simply has no way to express them.
pub fn render(document: &ConfigDocument, label: &SectionLabel) -> String {
    let mut lines = vec![format!("[{}]", label.as_str())];
    lines.extend(document.iter().map(|(key, value)| format!("{key} = {value}")));

    if label.is_synthetic() {
        let header = format!("[{SYNTHETIC_SECTION}]");
        lines.retain(|line| *line != header);
    }

    if lines.is_empty() {
        String::new()
    } else {
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// `Some(name)` when `line` is a `[name]` header line.
fn header_name(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    if inner.contains('[') || inner.contains(']') {
        return None;
    }
    Some(inner.trim())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
