//! Infrastructure layer for the SDK.
//!
//! Contains everything that touches the host system: the raw file store,
//! the config driver that orchestrates parsing and persistence, and the
//! platform dispatch that knows where the daemon keeps its config file.
//!
//! **Dependency rule**: this layer may depend on `coinrpc_core`, but must
//! not be imported by the core domain code.

pub mod storage;
