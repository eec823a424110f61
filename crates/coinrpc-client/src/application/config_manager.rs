//! The configuration facade exposed to SDK callers.

use std::path::PathBuf;

use coinrpc_core::ConfigDocument;

use crate::infrastructure::storage::{ConfigDriver, ConfigError, Platform};

/// OS-agnostic facade over one [`ConfigDriver`].
///
/// Always loads the config from the file system once, synchronously, at
/// construction.  After that, reads are served from memory unless the
/// caller explicitly asks for a reload, and writes stay in memory until
/// [`save_config`](Self::save_config).
#[derive(Debug)]
pub struct ConfigManager {
    driver: ConfigDriver,
}

impl ConfigManager {
    /// Manager for the platform's default config location.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedPlatform`] on hosts with no known config
    /// convention, plus anything the initial load can raise.  A missing
    /// file is not an error: the manager starts with an empty document and
    /// every option reports absent.
    pub fn new() -> Result<Self, ConfigError> {
        let platform = Platform::detect()?;
        Self::from_driver(ConfigDriver::for_platform(platform))
    }

    /// Manager for an explicit config file path (`~` is expanded).
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new), minus the platform check.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::from_driver(ConfigDriver::with_path(path))
    }

    fn from_driver(mut driver: ConfigDriver) -> Result<Self, ConfigError> {
        driver.load_from_fs()?;
        Ok(Self { driver })
    }

    /// The current document, optionally reloading from disk first.
    ///
    /// # Errors
    ///
    /// Only when `from_fs` is `true` and the reload fails; the error is
    /// the driver's, propagated unmodified.
    pub fn get_config(&mut self, from_fs: bool) -> Result<&ConfigDocument, ConfigError> {
        if from_fs {
            self.driver.load_from_fs()?;
        }
        Ok(self.driver.document())
    }

    /// Persists the in-memory document to the config file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Store`] on write failure.
    pub fn save_config(&mut self) -> Result<(), ConfigError> {
        self.driver.save_to_fs()
    }

    /// Looks up an option.  Absent options are `None`, not an error, so a
    /// first run with no config file behaves like an empty config.
    pub fn get_option(&self, name: &str) -> Option<&str> {
        self.driver.get(name)
    }

    /// Stages an option in memory.  The value is coerced to its text form;
    /// the backing file is untouched until [`save_config`](Self::save_config).
    pub fn set_option(&mut self, name: impl Into<String>, value: impl ToString) {
        self.driver.document_mut().set(name, value.to_string());
    }
}
