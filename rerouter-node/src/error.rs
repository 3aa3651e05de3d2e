//! Error types for the node client crate.

use std::net::SocketAddr;

/// Errors that can occur while calling the node's JSON-RPC endpoint.
///
/// A JSON-RPC error object returned by the node is not an error here: it is
/// a successfully decoded response. See [`rerouter_core::RpcOutcome`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NodeError {
    /// The node refused the TCP connection, i.e. it is not running.
    #[error("node at {addr} refused the connection")]
    Unreachable { addr: SocketAddr },

    /// Connecting failed for a reason other than refusal.
    #[error("connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP exchange with the node failed.
    #[error("HTTP exchange failed: {0}")]
    Http(String),

    /// The node answered, but not with a JSON-RPC response body.
    #[error("invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl NodeError {
    /// Returns `true` if the node is simply not running.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, NodeError::Unreachable { .. })
    }
}
