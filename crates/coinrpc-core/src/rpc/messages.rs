//! JSON-RPC 1.0 envelope types.
//!
//! Wire shape of one call and its reply:
//! ```text
//! -> {"jsonrpc": "1.0", "id": 7, "method": "getinfo", "params": []}
//! <- {"result": {...}, "error": null, "id": 7}
//! <- {"result": null, "error": {"code": -28, "message": "..."}, "id": 7}
//! ```
//!
//! The daemon always echoes the request `id` back, which is how callers
//! pair replies with in-flight calls over a pipelined transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Protocol version string sent in every request.
pub const JSONRPC_VERSION: &str = "1.0";

/// A single RPC call envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    /// Builds a request for `method` with positional `params`.
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

/// An application-level error reported by the daemon.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
#[error("RPC error {code}: {message}")]
pub struct RpcFault {
    pub code: i64,
    pub message: String,
}

/// The reply envelope for a single call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcFault>,
    pub id: u64,
}

impl RpcResponse {
    /// Collapses the result/error pair into a `Result`.
    ///
    /// A reply carrying neither field is treated as `result: null`, which
    /// is how the daemon acknowledges calls with no return value.
    pub fn into_result(self) -> Result<Value, RpcFault> {
        match (self.result, self.error) {
            (_, Some(fault)) => Err(fault),
            (Some(value), None) => Ok(value),
            (None, None) => Ok(Value::Null),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
