//! Application layer for the SDK.
//!
//! - **`config_manager`** – the OS-agnostic facade callers use to read and
//!   write daemon options (`get_option` / `set_option` / `save_config`).
//! - **`session`** – the explicit connection context: one config manager
//!   plus the logic that turns loaded options into an endpoint,
//!   credentials, and an RPC envelope builder.

pub mod config_manager;
pub mod session;

pub use config_manager::ConfigManager;
pub use session::{RpcClient, RpcCredentials, RpcEndpoint, Session};
