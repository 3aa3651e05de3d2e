//! Node transport abstraction trait.
//!
//! Lets the gateway talk to a real node over HTTP in production and to an
//! in-memory fake in tests, without changing the forwarding logic.

use async_trait::async_trait;
use rerouter_core::{RpcRequest, RpcResponse};

use crate::NodeError;

/// Sends one JSON-RPC request to the node listening on a local port.
///
/// Implementations must be `Send + Sync` to be shared across request tasks.
///
/// # Cancel Safety
/// Dropping the future abandons the call; no state is shared between calls.
#[async_trait]
pub trait NodeTransport: Send + Sync {
    /// Issue `request` to the node on `port` and decode its response.
    ///
    /// # Errors
    /// Returns [`NodeError::Unreachable`] if the node refuses the connection,
    /// and another [`NodeError`] variant for any other transport or decoding
    /// failure.
    async fn call(&self, port: u16, request: &RpcRequest) -> Result<RpcResponse, NodeError>;
}
