//! Entry point for the `pivx-rerouter` HTTP server.

use std::sync::Arc;

use rerouter_core::Network;
use rerouter_gateway::{
    config::{load_env_file, GatewayConfig},
    routes::{create_router, AppState},
    server,
};
use rerouter_node::{HttpTransport, NodeTransport};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match load_env_file(None) {
        Ok(Some(path)) => info!(path = %path.display(), "loaded environment file"),
        Ok(None) => {}
        Err(e) => tracing::error!(error = %e, "failed to load .env file"),
    }

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    for (network, port) in config.ports.enabled() {
        info!(network = %network, port, "forwarding to node");
    }
    if !config.ports.is_enabled(Network::Testnet) {
        info!("testnet disabled: TESTNET_RPC_PORT not set");
    }
    info!(methods = %config.allowlist, count = config.allowlist.len(), "RPC allowlist loaded");

    let transport: Arc<dyn NodeTransport> = Arc::new(HttpTransport::new(config.credentials.clone()));
    let app = create_router(AppState::new(config.allowlist.clone(), config.ports, transport));

    if let Err(e) = server::serve(config.listen, config.tls.as_ref(), app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
