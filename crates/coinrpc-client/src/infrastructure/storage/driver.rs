//! Config driver: owns the in-memory document and runs the load/save
//! pipeline over a [`ConfigStore`].
//!
//! Load path: `read_raw` → lenient parse → commit the single section's
//! mapping.  Save path: render under the label recorded at load time →
//! `write_raw`.  The driver is the only place the single-section invariant
//! is enforced: the format layer happily parses several sections, and the
//! driver refuses the file.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use coinrpc_core::config::document::{ConfigDocument, SectionLabel};
use coinrpc_core::config::format::{self, FormatError};

use super::{ConfigStore, DiskStore, StoreError};

/// Host platforms with a known config file location.
///
/// Adding support for a new OS means adding a variant (and its default
/// path constant) here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Unix-like systems: `~/.coind/coind.conf`.
    Posix,
}

impl Platform {
    /// Detects the platform this process is running on.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedPlatform`] on hosts with no known config
    /// file convention — currently everything that is not Unix-like.
    pub fn detect() -> Result<Self, ConfigError> {
        if cfg!(unix) {
            Ok(Platform::Posix)
        } else {
            Err(ConfigError::UnsupportedPlatform {
                os: std::env::consts::OS,
            })
        }
    }

    /// Default location of the daemon's config file on this platform.
    pub fn default_config_path(self) -> &'static Path {
        match self {
            Platform::Posix => Path::new("~/.coind/coind.conf"),
        }
    }
}

/// Errors surfaced by the driver and the manager facade.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File access failed for a reason other than "file absent".
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The file contents violate the grammar, independent of the
    /// missing-header convention (which the lenient parse absorbs).
    #[error("config file does not parse: {0}")]
    Malformed(#[from] FormatError),

    /// The file declares more than one section; the driver cannot tell
    /// which one holds the daemon's options.
    #[error("config file declares {count} sections, expected at most one")]
    AmbiguousSections { count: usize },

    /// This host OS has no known config file convention.
    #[error("unsupported host platform: {os}")]
    UnsupportedPlatform { os: &'static str },
}

/// Owns one parsed config document and the path it syncs with.
///
/// The document starts empty ("unloaded"); `load_from_fs` replaces it with
/// the file's contents, and a failed load leaves the previous document
/// untouched.  Lookups never reload implicitly.
#[derive(Debug)]
pub struct ConfigDriver<S = DiskStore> {
    store: S,
    /// Configured file path; may start with `~`.
    path: PathBuf,
    /// Path of the last successful load or save, if any.
    last_synced: Option<PathBuf>,
    /// Label recorded by the last load; governs header stripping on save.
    section: SectionLabel,
    document: ConfigDocument,
}

impl ConfigDriver<DiskStore> {
    /// Driver for the platform's default config location.
    pub fn for_platform(platform: Platform) -> Self {
        Self::with_store(DiskStore::new(), platform.default_config_path())
    }

    /// Driver for an explicit config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::with_store(DiskStore::new(), path)
    }
}

impl<S: ConfigStore> ConfigDriver<S> {
    /// Driver reading and writing through `store`.
    pub fn with_store(store: S, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
            last_synced: None,
            section: SectionLabel::Synthetic,
            document: ConfigDocument::new(),
        }
    }

    /// Replaces the in-memory document with the file's contents.
    ///
    /// A missing file and a file with zero sections both leave an empty
    /// document: "nothing configured yet" is a usable state, not an error.
    /// Either way the section label resets to synthetic, so a subsequent
    /// save writes the headerless convention.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Store`] for I/O failures other than absence,
    /// [`ConfigError::Malformed`] when the contents don't parse, and
    /// [`ConfigError::AmbiguousSections`] when more than one section is
    /// declared.  On error the previous document is left untouched.
    pub fn load_from_fs(&mut self) -> Result<(), ConfigError> {
        let raw = match self.store.read_raw(&self.path) {
            Ok(raw) => raw,
            Err(StoreError::NotFound { path }) => {
                debug!(path = %path.display(), "config file absent; starting empty");
                self.document = ConfigDocument::new();
                self.section = SectionLabel::Synthetic;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let (mut sections, used_synthetic) = format::parse_lenient(&raw)?;
        match sections.len() {
            0 => {
                self.document = ConfigDocument::new();
                self.section = SectionLabel::Synthetic;
            }
            1 => {
                let section = sections.remove(0);
                self.section = if used_synthetic {
                    SectionLabel::Synthetic
                } else {
                    SectionLabel::Named(section.name)
                };
                self.document = section.entries;
            }
            count => return Err(ConfigError::AmbiguousSections { count }),
        }

        debug!(
            path = %self.path.display(),
            options = self.document.len(),
            "config loaded"
        );
        self.last_synced = Some(self.path.clone());
        Ok(())
    }

    /// Writes the in-memory document back to the file.
    ///
    /// Renders under the label recorded at load time, so a headerless file
    /// stays headerless and a `[named]` file keeps its header.  Does not
    /// reload afterwards; callers re-query if they need to observe the
    /// written state.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Store`] on write failure.
    pub fn save_to_fs(&mut self) -> Result<(), ConfigError> {
        let text = format::render(&self.document, &self.section);
        self.store.write_raw(&self.path, &text)?;
        self.last_synced = Some(self.path.clone());
        debug!(
            path = %self.path.display(),
            options = self.document.len(),
            "config saved"
        );
        Ok(())
    }

    /// `true` when `key` is present in the in-memory document.
    pub fn contains(&self, key: &str) -> bool {
        self.document.contains_key(key)
    }

    /// In-memory lookup; never triggers a reload.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.document.get(key)
    }

    /// The current document.
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Mutable access for staging changes ahead of a save.
    pub fn document_mut(&mut self) -> &mut ConfigDocument {
        &mut self.document
    }

    /// Configured file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the last successful load or save.
    pub fn last_synced(&self) -> Option<&Path> {
        self.last_synced.as_deref()
    }

    /// The store this driver reads and writes through.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-points the driver at a different file.  The in-memory document
    /// is kept; call [`load_from_fs`](Self::load_from_fs) to replace it.
    pub fn repoint(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::super::MemoryStore;
    use super::*;

    const PATH: &str = "/test/coind.conf";

    fn driver_with(contents: &str) -> ConfigDriver<MemoryStore> {
        let store = MemoryStore::new();
        store.insert(PATH, contents);
        ConfigDriver::with_store(store, PATH)
    }

    // ── Platform dispatch ─────────────────────────────────────────────────────

    #[test]
    fn test_platform_detect_is_posix_on_unix() {
        // The test suite only runs on Unix-like hosts.
        assert_eq!(Platform::detect().unwrap(), Platform::Posix);
    }

    #[test]
    fn test_posix_default_path_is_under_home() {
        let path = Platform::Posix.default_config_path();
        assert_eq!(path, Path::new("~/.coind/coind.conf"));
    }

    // ── load_from_fs ──────────────────────────────────────────────────────────

    #[test]
    fn test_load_missing_file_yields_empty_document() {
        let mut driver = ConfigDriver::with_store(MemoryStore::new(), PATH);

        driver.load_from_fs().expect("absent file is not an error");

        assert!(driver.document().is_empty());
        assert_eq!(driver.last_synced(), None);
    }

    #[test]
    fn test_load_headerless_file_populates_document() {
        let mut driver = driver_with("rpcuser = alice\nrpcpassword = secret\n");

        driver.load_from_fs().unwrap();

        assert_eq!(driver.get("rpcuser"), Some("alice"));
        assert_eq!(driver.get("rpcpassword"), Some("secret"));
        assert!(driver.contains("rpcuser"));
        assert_eq!(driver.last_synced(), Some(Path::new(PATH)));
    }

    #[test]
    fn test_load_empty_file_yields_empty_document() {
        let mut driver = driver_with("");
        driver.load_from_fs().unwrap();
        assert!(driver.document().is_empty());
    }

    #[test]
    fn test_load_two_sections_is_ambiguous_and_preserves_state() {
        let mut driver = driver_with("rpcuser = alice\n");
        driver.load_from_fs().unwrap();

        // The file changes under us to something with two sections.
        driver.store().insert(PATH, "[a]\nx = 1\n[b]\ny = 2\n");
        let err = driver.load_from_fs().unwrap_err();

        assert!(matches!(err, ConfigError::AmbiguousSections { count: 2 }));
        // The previously loaded document survives the failed reload.
        assert_eq!(driver.get("rpcuser"), Some("alice"));
    }

    #[test]
    fn test_load_malformed_file_fails_and_preserves_state() {
        let mut driver = driver_with("rpcuser = alice\n");
        driver.load_from_fs().unwrap();

        driver.store().insert(PATH, "rpcuser alice\n");
        let err = driver.load_from_fs().unwrap_err();

        assert!(matches!(err, ConfigError::Malformed(_)));
        assert_eq!(driver.get("rpcuser"), Some("alice"));
    }

    // ── save_to_fs ────────────────────────────────────────────────────────────

    #[test]
    fn test_save_headerless_file_stays_headerless() {
        let mut driver = driver_with("rpcuser = alice\n");
        driver.load_from_fs().unwrap();

        driver.document_mut().set("rpcport", "8332");
        driver.save_to_fs().unwrap();

        let written = driver.store().contents(Path::new(PATH)).unwrap();
        assert_eq!(written, "rpcuser = alice\nrpcport = 8332\n");
    }

    #[test]
    fn test_save_named_section_keeps_header() {
        let mut driver = driver_with("[wallet]\nrpcport = 9000\n");
        driver.load_from_fs().unwrap();

        driver.save_to_fs().unwrap();

        let written = driver.store().contents(Path::new(PATH)).unwrap();
        assert_eq!(written, "[wallet]\nrpcport = 9000\n");
    }

    #[test]
    fn test_save_twice_is_byte_identical() {
        let mut driver = driver_with("rpcuser = alice\nrpcport = 8332\n");
        driver.load_from_fs().unwrap();

        driver.save_to_fs().unwrap();
        driver.save_to_fs().unwrap();

        let writes = driver.store().writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0], writes[1]);
    }

    #[test]
    fn test_save_then_load_round_trips_mapping() {
        let mut driver = driver_with("rpcuser = alice\nrpcport = 8332\n");
        driver.load_from_fs().unwrap();
        let before = driver.document().clone();

        driver.save_to_fs().unwrap();
        driver.load_from_fs().unwrap();

        assert_eq!(*driver.document(), before);
    }

    #[test]
    fn test_save_never_loaded_document_writes_headerless() {
        // A driver that was never loaded still saves: it writes whatever
        // was staged, under the headerless convention.
        let mut driver = ConfigDriver::with_store(MemoryStore::new(), PATH);
        driver.document_mut().set("timeout", "30");

        driver.save_to_fs().unwrap();

        let written = driver.store().contents(Path::new(PATH)).unwrap();
        assert_eq!(written, "timeout = 30\n");
    }

    // ── repoint ───────────────────────────────────────────────────────────────

    #[test]
    fn test_repoint_changes_target_path() {
        let store = MemoryStore::new();
        store.insert("/test/other.conf", "rpcport = 1234\n");
        let mut driver = ConfigDriver::with_store(store, PATH);
        driver.load_from_fs().unwrap();
        assert!(driver.document().is_empty());

        driver.repoint("/test/other.conf");
        driver.load_from_fs().unwrap();

        assert_eq!(driver.get("rpcport"), Some("1234"));
        assert_eq!(driver.path(), Path::new("/test/other.conf"));
    }
}
