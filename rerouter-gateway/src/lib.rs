//! HTTP gateway that forwards allowlisted RPC calls to a local PIVX node.
//!
//! `GET /mainnet/{rpc}?params=a,b` (and `/testnet/{rpc}` when a testnet
//! port is configured) becomes a JSON-RPC 1.0 call to the node; the node's
//! answer is mapped back onto an HTTP status and a plain-text body.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
