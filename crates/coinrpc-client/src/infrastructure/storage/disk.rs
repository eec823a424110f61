//! File-system store with home-directory expansion.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{ConfigStore, StoreError};

/// Reads and writes config files on the local file system.
///
/// Writes truncate and rewrite the file in place.  There is no
/// temp-file-and-rename step, so a crash mid-write can leave a partially
/// written file.  That window is accepted for a small credentials file the
/// user can regenerate, but callers should know it exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl DiskStore {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigStore for DiskStore {
    fn read_raw(&self, path: &Path) -> Result<String, StoreError> {
        let full = expand_home(path);
        match fs::read_to_string(&full) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound { path: full })
            }
            Err(source) => Err(StoreError::Io { path: full, source }),
        }
    }

    fn write_raw(&self, path: &Path, text: &str) -> Result<(), StoreError> {
        let full = expand_home(path);
        fs::write(&full, text).map_err(|source| StoreError::Io { path: full, source })
    }
}

/// Expands a leading `~` component to the `HOME` directory.
///
/// `~user` forms are not expanded.  Paths without the token — and
/// environments without `HOME` — pass through unchanged, and the
/// subsequent open reports whatever error results.
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_rewrites_leading_tilde() {
        // Only meaningful where HOME is set (always true on the CI targets).
        if let Some(home) = std::env::var_os("HOME") {
            let expanded = expand_home(Path::new("~/.coind/coind.conf"));
            assert_eq!(expanded, PathBuf::from(home).join(".coind/coind.conf"));
        }
    }

    #[test]
    fn test_expand_home_leaves_absolute_paths_alone() {
        let path = Path::new("/etc/coind/coind.conf");
        assert_eq!(expand_home(path), path.to_path_buf());
    }

    #[test]
    fn test_expand_home_does_not_expand_named_user() {
        // `~bob` is a different convention; we pass it through untouched.
        let path = Path::new("~bob/coind.conf");
        assert_eq!(expand_home(path), path.to_path_buf());
    }

    #[test]
    fn test_read_raw_missing_file_is_not_found() {
        let result = DiskStore::new().read_raw(Path::new("/nonexistent/coinrpc/coind.conf"));
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_read_raw_directory_is_io_error() {
        // Reading a directory exists but is not a file: must surface as Io,
        // not NotFound, so the caller does not mistake it for "first run".
        let result = DiskStore::new().read_raw(Path::new("/"));
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }
}
