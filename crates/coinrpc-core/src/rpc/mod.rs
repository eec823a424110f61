//! RPC wire types for talking to the daemon.
//!
//! The daemon exposes a bitcoin-family JSON-RPC interface.  This module
//! defines the envelope shapes only; it never opens a connection.  The
//! transport (HTTP client, socket, test harness) is supplied by the
//! application and fed [`messages::RpcRequest`] values built by the
//! `coinrpc-client` session layer.

pub mod messages;
