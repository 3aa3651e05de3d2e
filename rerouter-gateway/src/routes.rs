//! Axum route handlers for the rerouter gateway.

use std::{any::Any, sync::Arc};

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rerouter_core::{
    parse_params, render_result, Allowlist, Network, NodePorts, RpcOutcome, RpcRequest,
};
use rerouter_node::NodeTransport;
use serde::Deserialize;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    allowlist: Arc<Allowlist>,
    ports: NodePorts,
    transport: Arc<dyn NodeTransport>,
}

impl AppState {
    #[must_use]
    pub fn new(allowlist: Allowlist, ports: NodePorts, transport: Arc<dyn NodeTransport>) -> Self {
        Self {
            allowlist: Arc::new(allowlist),
            ports,
            transport,
        }
    }
}

// ── Request types ────────────────────────────────────────────────────────────

/// Query string of an RPC route: `?params=a,b,c`.
#[derive(Debug, Default, Deserialize)]
pub struct RpcQuery {
    pub params: Option<String>,
}

// ── Router ───────────────────────────────────────────────────────────────────

/// Build the application router.
///
/// `/testnet/{rpc}` is only registered when a testnet port is configured, so
/// without one it answers 404 like any unknown path.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/mainnet/{rpc}", get(mainnet_rpc));

    if state.ports.is_enabled(Network::Testnet) {
        router = router.route("/testnet/{rpc}", get(testnet_rpc));
    }

    router
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// `GET /health`: liveness check. Does not contact the node.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /mainnet/{rpc}`: forward to the mainnet node.
///
/// # Errors
/// See [`forward`].
pub async fn mainnet_rpc(
    State(state): State<AppState>,
    Path(rpc): Path<String>,
    query: Result<Query<RpcQuery>, QueryRejection>,
) -> Result<String, GatewayError> {
    let query = rpc_query(query)?;
    forward(&state, Network::Mainnet, &rpc, query.params.as_deref()).await
}

/// `GET /testnet/{rpc}`: forward to the testnet node.
///
/// # Errors
/// See [`forward`].
pub async fn testnet_rpc(
    State(state): State<AppState>,
    Path(rpc): Path<String>,
    query: Result<Query<RpcQuery>, QueryRejection>,
) -> Result<String, GatewayError> {
    let query = rpc_query(query)?;
    forward(&state, Network::Testnet, &rpc, query.params.as_deref()).await
}

/// An undecodable query string (for example a repeated `params` key) is an
/// internal error, not a client error.
fn rpc_query(query: Result<Query<RpcQuery>, QueryRejection>) -> Result<RpcQuery, GatewayError> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => {
            tracing::error!(error = %rejection, "failed to decode query string");
            Err(GatewayError::Internal)
        }
    }
}

/// Validate, forward and translate one RPC call.
///
/// On success returns the JSON text of the node's `result`, with integral
/// floats written as integers (see [`render_result`]).
///
/// # Errors
/// - [`GatewayError::MethodNotAllowed`] if `method` is not allowlisted; the
///   node is not contacted.
/// - [`GatewayError::NetworkDisabled`] if `network` has no port.
/// - [`GatewayError::Rpc`] if the node's `error` member was truthy.
/// - [`GatewayError::Node`] if the call failed below the JSON-RPC layer.
pub async fn forward(
    state: &AppState,
    network: Network,
    method: &str,
    raw_params: Option<&str>,
) -> Result<String, GatewayError> {
    if !state.allowlist.contains(method) {
        return Err(GatewayError::MethodNotAllowed(method.to_owned()));
    }
    let port = state
        .ports
        .port(network)
        .ok_or(GatewayError::NetworkDisabled(network))?;

    let request = RpcRequest::new(method, parse_params(raw_params));
    let response = state.transport.call(port, &request).await?;

    match response.into_outcome() {
        RpcOutcome::Success(result) => Ok(render_result(result)),
        RpcOutcome::Failure(message) => Err(GatewayError::Rpc(message)),
    }
}

// ── Panic handling ───────────────────────────────────────────────────────────

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "request handler panicked");
    GatewayError::Internal.into_response()
}
