//! # coinrpc-client
//!
//! Client SDK for a coind-style daemon.  It reads the daemon's RPC
//! credentials file (`~/.coind/coind.conf` on Unix-like systems), exposes
//! get/set/save over the loaded options, and resolves the connection
//! parameters (host, port, credentials) the RPC transport needs.
//!
//! The config file is deliberately primitive: bare `key = value` lines, no
//! section header, values unquoted.  [`ConfigManager`] hides the work of
//! parsing that shape with a sectioned grammar (a synthetic header is
//! injected on read and stripped on write) and of finding the file on the
//! host platform.
//!
//! ```no_run
//! use coinrpc_client::Session;
//!
//! let session = Session::new()?;
//! let endpoint = session.endpoint();
//! let mut client = session.client();
//! let request = client.request("getinfo", vec![]);
//! # let _ = (endpoint, request);
//! # Ok::<(), coinrpc_client::ConfigError>(())
//! ```
//!
//! Everything here is synchronous and single-threaded: file I/O happens
//! inline on the calling thread, and each manager owns its document
//! exclusively.  Two managers pointed at the same file race with
//! last-writer-wins semantics — don't do that.

/// Application layer: the configuration facade and the session context.
pub mod application;
/// Infrastructure layer: file store, config driver, platform dispatch.
pub mod infrastructure;
/// Logging bootstrap helper for binaries and tests.
pub mod logging;

pub use application::{ConfigManager, RpcClient, RpcCredentials, RpcEndpoint, Session};
pub use infrastructure::storage::{
    ConfigDriver, ConfigError, ConfigStore, DiskStore, MemoryStore, Platform, StoreError,
};

// Re-export the core domain types callers touch through the facade.
pub use coinrpc_core::{ConfigDocument, SectionLabel};
