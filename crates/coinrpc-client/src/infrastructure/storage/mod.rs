//! Storage infrastructure: configuration file persistence.
//!
//! [`ConfigStore`] is the seam between the driver and the file system.
//! One call is one open/operate/close cycle; implementations hold no file
//! handle between calls, so handles are released on every exit path,
//! including I/O failure.
//!
//! - **`disk`** – [`DiskStore`], the real implementation with `~`
//!   expansion.
//! - **`driver`** – [`ConfigDriver`], which owns the in-memory document
//!   and runs the load/save pipeline, plus [`Platform`] dispatch.
//! - **`mock`** – [`MemoryStore`], an in-memory store for tests.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod disk;
pub mod driver;
pub mod mock;

pub use disk::DiskStore;
pub use driver::{ConfigDriver, ConfigError, Platform};
pub use mock::MemoryStore;

/// Errors from raw file access.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The config file does not exist.  Callers treat this as "no config
    /// has been created yet", not as a failure.
    #[error("config file not found at {path}")]
    NotFound { path: PathBuf },

    /// Any other access failure (permissions, path is a directory, disk
    /// trouble).  Always propagated, never swallowed.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Raw text access to a configuration file.
pub trait ConfigStore {
    /// Reads the full contents of the file at `path`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when the file is absent, [`StoreError::Io`]
    /// for every other access failure.
    fn read_raw(&self, path: &Path) -> Result<String, StoreError>;

    /// Replaces the contents of the file at `path` with `text`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] on access failure.
    fn write_raw(&self, path: &Path, text: &str) -> Result<(), StoreError>;
}
