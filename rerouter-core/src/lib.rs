//! Core types for the PIVX JSON-RPC rerouter.
//!
//! Defines the domain vocabulary shared by the gateway and the node client:
//! networks and their ports, the method allowlist, node credentials,
//! parameter coercion, and the JSON-RPC envelope.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod allowlist;
pub mod credentials;
pub mod error;
pub mod network;
pub mod params;
pub mod rpc;

pub use allowlist::Allowlist;
pub use credentials::Credentials;
pub use error::CoreError;
pub use network::{Network, NodePorts, DEFAULT_MAINNET_RPC_PORT};
pub use params::{parse_params, RpcParam};
pub use rpc::{render_result, RpcOutcome, RpcRequest, RpcResponse, JSONRPC_VERSION, REQUEST_ID};
