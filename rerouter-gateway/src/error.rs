//! Error types for the gateway crate.

use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rerouter_core::Network;
use rerouter_node::NodeError;

/// Body sent for methods outside the allowlist.
pub const INVALID_RPC: &str = "Invalid RPC";
/// Body sent when the node refuses the connection.
pub const NODE_NOT_RESPONSIVE: &str = "PIVX node was not responsive.";
/// Body sent when the node's answer could not be understood.
pub const NODE_INVALID_RESPONSE: &str = "PIVX node returned an invalid response.";
/// Body sent when a handler panics.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Errors that can occur while handling a forwarded RPC request.
///
/// Every variant is terminal for its request; nothing is retried.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The method is not on the allowlist. Nothing was sent to the node.
    #[error("RPC method not allowed: {0}")]
    MethodNotAllowed(String),

    /// No node port is configured for this network.
    #[error("network disabled: {0}")]
    NetworkDisabled(Network),

    /// The node answered with a JSON-RPC error object.
    #[error("node returned an RPC error: {0}")]
    Rpc(String),

    /// The call to the node failed below the JSON-RPC layer.
    #[error(transparent)]
    Node(#[from] NodeError),

    /// A handler panicked.
    #[error("internal server error")]
    Internal,
}

impl GatewayError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MethodNotAllowed(_) => StatusCode::FORBIDDEN,
            GatewayError::NetworkDisabled(_) => StatusCode::NOT_FOUND,
            GatewayError::Rpc(_) => StatusCode::IM_A_TEAPOT,
            GatewayError::Node(e) if e.is_unreachable() => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::Node(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            GatewayError::MethodNotAllowed(_) => INVALID_RPC.to_owned(),
            GatewayError::NetworkDisabled(network) => format!("{network} is not enabled"),
            GatewayError::Rpc(message) => message,
            GatewayError::Node(e) if e.is_unreachable() => NODE_NOT_RESPONSIVE.to_owned(),
            GatewayError::Node(e) => {
                tracing::error!(error = %e, "unexpected failure calling node");
                NODE_INVALID_RESPONSE.to_owned()
            }
            GatewayError::Internal => INTERNAL_SERVER_ERROR.to_owned(),
        };
        (status, body).into_response()
    }
}

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ServeError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The TLS certificate or key could not be loaded.
    #[error("failed to load TLS certificate/key: {0}")]
    Tls(#[source] std::io::Error),

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    async fn body_text(resp: Response) -> String {
        let bytes = match axum::body::to_bytes(resp.into_body(), 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn unreachable() -> NodeError {
        NodeError::Unreachable { addr: SocketAddr::from(([127, 0, 0, 1], 51473)) }
    }

    fn garbage() -> NodeError {
        match serde_json::from_str::<serde_json::Value>("not json") {
            Ok(v) => panic!("unexpectedly parsed {v}"),
            Err(e) => NodeError::InvalidResponse(e),
        }
    }

    #[test]
    fn gateway_error_status_codes_map_correctly() {
        assert_eq!(GatewayError::MethodNotAllowed("stop".to_owned()).status(), StatusCode::FORBIDDEN);
        assert_eq!(GatewayError::Rpc("boom".to_owned()).status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(GatewayError::Node(unreachable()).status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(GatewayError::Node(garbage()).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(GatewayError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(GatewayError::NetworkDisabled(Network::Testnet).status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn method_not_allowed_body_does_not_echo_method() {
        let resp = GatewayError::MethodNotAllowed("dumpprivkey".to_owned()).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_text(resp).await, "Invalid RPC");
    }

    #[tokio::test]
    async fn rpc_error_body_is_node_message() {
        let resp = GatewayError::Rpc("Block height out of range".to_owned()).into_response();
        assert_eq!(body_text(resp).await, "Block height out of range");
    }

    #[tokio::test]
    async fn unreachable_node_body_is_fixed_text() {
        let resp = GatewayError::Node(unreachable()).into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_text(resp).await, "PIVX node was not responsive.");
    }

    #[test]
    fn gateway_error_display_includes_message() {
        let err = GatewayError::MethodNotAllowed("stop".to_owned());
        assert!(err.to_string().contains("stop"), "Display must include the method");
    }
}
