//! Configuration domain: the in-memory document and its text format.
//!
//! - **`document`** – [`ConfigDocument`](document::ConfigDocument), the flat
//!   option-name → value mapping, and the [`SectionLabel`](document::SectionLabel)
//!   that records how the backing file was headed.
//! - **`format`** – the sectioned grammar: strict parse, the lenient
//!   two-step parse that tolerates a headerless file, and the renderer that
//!   writes one back.

pub mod document;
pub mod format;
