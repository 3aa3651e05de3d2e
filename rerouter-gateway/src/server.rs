//! Plain HTTP or TLS listener for the gateway router.

use std::{
    net::{SocketAddr, TcpListener},
    time::Duration,
};

use axum::Router;
use axum_server::{tls_rustls::RustlsConfig, Handle};
use tracing::info;

use crate::{config::TlsPaths, error::ServeError};

/// How long in-flight requests may run after a shutdown signal on TLS.
const TLS_SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// Load the PEM certificate chain and private key.
///
/// # Errors
/// Returns [`ServeError::Tls`] if either file cannot be read or parsed.
pub async fn load_tls(paths: &TlsPaths) -> Result<RustlsConfig, ServeError> {
    info!(
        cert_path = %paths.certificate.display(),
        key_path = %paths.key.display(),
        "loading TLS certificate and key"
    );
    RustlsConfig::from_pem_file(&paths.certificate, &paths.key)
        .await
        .map_err(ServeError::Tls)
}

/// Bind a non-blocking listener for the TLS server.
///
/// # Errors
/// Returns [`ServeError::Bind`] if the address is unavailable.
pub fn bind_listener(addr: SocketAddr) -> Result<TcpListener, ServeError> {
    let listener = TcpListener::bind(addr).map_err(|source| ServeError::Bind { addr, source })?;
    listener
        .set_nonblocking(true)
        .map_err(|source| ServeError::Bind { addr, source })?;
    Ok(listener)
}

/// Serve `app` until the process receives Ctrl-C.
///
/// TLS material is loaded before anything is bound, so a bad certificate
/// never leaves a half-started listener behind.
///
/// # Errors
/// Returns [`ServeError::Tls`] if TLS material cannot be loaded,
/// [`ServeError::Bind`] if the address is unavailable, and [`ServeError::Io`]
/// if the server fails while running.
pub async fn serve(
    addr: SocketAddr,
    tls: Option<&TlsPaths>,
    app: Router,
) -> Result<(), ServeError> {
    if let Some(paths) = tls {
        let rustls = load_tls(paths).await?;
        let listener = bind_listener(addr)?;
        let handle = Handle::new();
        let shutdown = handle.clone();
        tokio::spawn(async move {
            shutdown_signal().await;
            shutdown.graceful_shutdown(Some(TLS_SHUTDOWN_GRACE));
        });

        info!(addr = %addr, tls = true, "PIVX rerouter listening");
        axum_server::from_tcp_rustls(listener, rustls)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServeError::Bind { addr, source })?;

        info!(addr = %addr, tls = false, "PIVX rerouter listening");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
    }
    info!("PIVX rerouter stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
