//! In-memory [`ConfigStore`] for unit tests.
//!
//! The real store touches the file system and the `HOME` environment
//! variable, which makes driver tests slow and order-sensitive.
//! `MemoryStore` replaces both reads and writes with a map lookup and
//! records every write payload, so tests can assert on exactly the bytes
//! that would have reached the disk (e.g. that two consecutive saves
//! produce identical output).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{ConfigStore, StoreError};

/// Test double backed by a path → contents map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, String>>,
    writes: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the file at `path`.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files
            .lock()
            .expect("memory store lock")
            .insert(path.into(), contents.into());
    }

    /// Current contents of `path`, if ever inserted or written.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .expect("memory store lock")
            .get(path)
            .cloned()
    }

    /// Payloads of every `write_raw` call, in call order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().expect("memory store lock").clone()
    }
}

impl ConfigStore for MemoryStore {
    fn read_raw(&self, path: &Path) -> Result<String, StoreError> {
        self.files
            .lock()
            .expect("memory store lock")
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn write_raw(&self, path: &Path, text: &str) -> Result<(), StoreError> {
        self.files
            .lock()
            .expect("memory store lock")
            .insert(path.to_path_buf(), text.to_string());
        self.writes
            .lock()
            .expect("memory store lock")
            .push(text.to_string());
        Ok(())
    }
}
