//! Explicit session context for talking to the daemon.
//!
//! There is no process-wide default session: callers construct a
//! [`Session`] and hand it to whatever needs one.  [`Session::new`] is the
//! convenience constructor that wires up platform defaults; everything it
//! does can also be assembled by hand via [`Session::from_manager`].
//!
//! The session resolves connection parameters from the loaded config on
//! demand.  Absent options fall back to built-in defaults, so a first run
//! against a local daemon needs no config file at all.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use tracing::warn;

use coinrpc_core::rpc::messages::RpcRequest;

use crate::application::config_manager::ConfigManager;
use crate::infrastructure::storage::ConfigError;

// Option names the session reads from the config file.
const OPT_HOST: &str = "rpcconnect";
const OPT_PORT: &str = "rpcport";
const OPT_USER: &str = "rpcuser";
const OPT_PASSWORD: &str = "rpcpassword";

// Built-in defaults used when an option is absent.
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8332;

/// Where the daemon's RPC interface listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcEndpoint {
    pub host: String,
    pub port: u16,
}

impl fmt::Display for RpcEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// RPC credential pair from the config file.
#[derive(Clone, PartialEq, Eq)]
pub struct RpcCredentials {
    pub user: String,
    pub password: String,
}

// Manual Debug keeps the password out of logs and panic messages.
impl fmt::Debug for RpcCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcCredentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// One configured connection context.
///
/// Owns a [`ConfigManager`]; connection parameters are resolved from the
/// loaded document each time they are asked for, so staging and saving new
/// options through [`config_mut`](Self::config_mut) is immediately visible.
#[derive(Debug)]
pub struct Session {
    config: ConfigManager,
}

impl Session {
    /// Session backed by the platform's default config location.
    ///
    /// # Errors
    ///
    /// Whatever [`ConfigManager::new`] raises.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self::from_manager(ConfigManager::new()?))
    }

    /// Session backed by an explicit config file.
    ///
    /// # Errors
    ///
    /// Whatever [`ConfigManager::with_path`] raises.
    pub fn with_config_path(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Ok(Self::from_manager(ConfigManager::with_path(path)?))
    }

    /// Session over an already-constructed manager.
    pub fn from_manager(config: ConfigManager) -> Self {
        Self { config }
    }

    /// The underlying configuration facade.
    pub fn config(&self) -> &ConfigManager {
        &self.config
    }

    /// Mutable access, e.g. to stage and save option changes.
    pub fn config_mut(&mut self) -> &mut ConfigManager {
        &mut self.config
    }

    /// Host the daemon listens on: `rpcconnect`, defaulting to loopback.
    pub fn rpc_host(&self) -> String {
        self.config
            .get_option(OPT_HOST)
            .unwrap_or(DEFAULT_HOST)
            .to_string()
    }

    /// RPC port: `rpcport`, defaulting to 8332.
    ///
    /// A configured value that does not parse as a port is ignored with a
    /// warning rather than failing the whole session; the daemon would
    /// have rejected it too.
    pub fn rpc_port(&self) -> u16 {
        match self.config.get_option(OPT_PORT) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "rpcport is not a valid port; using default");
                DEFAULT_PORT
            }),
        }
    }

    /// Credential pair; `None` unless both `rpcuser` and `rpcpassword`
    /// are configured.
    pub fn credentials(&self) -> Option<RpcCredentials> {
        let user = self.config.get_option(OPT_USER)?;
        let password = self.config.get_option(OPT_PASSWORD)?;
        Some(RpcCredentials {
            user: user.to_string(),
            password: password.to_string(),
        })
    }

    /// The resolved endpoint.
    pub fn endpoint(&self) -> RpcEndpoint {
        RpcEndpoint {
            host: self.rpc_host(),
            port: self.rpc_port(),
        }
    }

    /// Builds an RPC client over the resolved endpoint and credentials.
    pub fn client(&self) -> RpcClient {
        RpcClient::new(self.endpoint(), self.credentials())
    }
}

/// Builds JSON-RPC request envelopes against one endpoint.
///
/// Transport is intentionally not part of this SDK: the client produces
/// [`RpcRequest`] values for whatever HTTP or socket layer the application
/// brings, numbering them sequentially so replies can be paired with
/// requests.
#[derive(Debug)]
pub struct RpcClient {
    endpoint: RpcEndpoint,
    credentials: Option<RpcCredentials>,
    next_id: u64,
}

impl RpcClient {
    pub fn new(endpoint: RpcEndpoint, credentials: Option<RpcCredentials>) -> Self {
        Self {
            endpoint,
            credentials,
            next_id: 0,
        }
    }

    pub fn endpoint(&self) -> &RpcEndpoint {
        &self.endpoint
    }

    pub fn credentials(&self) -> Option<&RpcCredentials> {
        self.credentials.as_ref()
    }

    /// The next request envelope for `method` with positional `params`.
    pub fn request(&mut self, method: impl Into<String>, params: Vec<Value>) -> RpcRequest {
        let id = self.next_id;
        self.next_id += 1;
        RpcRequest::new(id, method, params)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
