//! In-memory model of the daemon's configuration file.
//!
//! A [`ConfigDocument`] is a flat, insertion-ordered mapping of option
//! names to raw string values.  The on-disk file has no nesting and no
//! typed values; callers coerce strings themselves (`rpcport = 8332` is
//! the string `"8332"` until somebody parses it).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved section name injected when the on-disk file has no header line.
///
/// The name never reaches a file written by this crate: the save path
/// strips the header line again whenever the label in use is synthetic.
pub const SYNTHETIC_SECTION: &str = "FAKE_SECTION";

/// The section a loaded document belongs to.
///
/// Decided once per load: `Named` when the file carried a real `[header]`
/// line, `Synthetic` when parsing only succeeded after injecting
/// [`SYNTHETIC_SECTION`].  The save path consults this label to decide
/// whether the rendered header line must be stripped before the text hits
/// disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionLabel {
    /// A header the user actually wrote, e.g. `[main]`.
    Named(String),
    /// The injected sentinel; the file itself is headerless.
    Synthetic,
}

impl SectionLabel {
    /// The header name as it appears between the brackets.
    pub fn as_str(&self) -> &str {
        match self {
            SectionLabel::Named(name) => name,
            SectionLabel::Synthetic => SYNTHETIC_SECTION,
        }
    }

    /// `true` when this label is the injected sentinel.
    pub fn is_synthetic(&self) -> bool {
        matches!(self, SectionLabel::Synthetic)
    }
}

/// Flat option-name → value mapping for one configuration file.
///
/// Keys are case-sensitive and non-empty; values are raw text.  Entries
/// keep insertion order so that rendering a freshly loaded document
/// reproduces the original option order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    entries: IndexMap<String, String>,
}

impl ConfigDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an option value.  Absent keys are `None`, never an error.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts or replaces an option.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// `true` when the option is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes an option, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no options are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
