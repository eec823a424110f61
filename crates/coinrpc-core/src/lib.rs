//! # coinrpc-core
//!
//! Shared library for the coind RPC SDK: the configuration document model,
//! the sectioned text grammar used to read and write the daemon's
//! credentials file, and the JSON-RPC envelope types exchanged with the
//! daemon.
//!
//! This crate has zero dependencies on OS APIs, file systems, or network
//! sockets.  File I/O, platform detection, and session handling all live in
//! `coinrpc-client`.
//!
//! # Why a "sectioned" grammar for a file with no sections?
//!
//! The daemon's config file is a bare list of `key = value` lines — the
//! INI family with the header line amputated.  Rather than writing a
//! second, slightly different parser for that shape, the `config::format`
//! module parses the general sectioned grammar and bridges the gap with a
//! synthetic header: injected before parsing a headerless file, stripped
//! again before writing one.  See [`config::format::parse_lenient`].

pub mod config;
pub mod rpc;

// Re-export the most-used types at the crate root so callers can write
// `coinrpc_core::ConfigDocument` instead of the full module path.
pub use config::document::{ConfigDocument, SectionLabel, SYNTHETIC_SECTION};
pub use config::format::{parse_lenient, parse_sectioned, render, FormatError, Section};
pub use rpc::messages::{RpcFault, RpcRequest, RpcResponse, JSONRPC_VERSION};
