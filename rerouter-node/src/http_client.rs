//! HTTP/1.1 JSON-RPC client for the node's local TCP endpoint.
//!
//! Each call opens a fresh connection, sends one POST and decodes the body.
//! The node answers RPC-level errors with a non-2xx status and a normal
//! JSON-RPC body, so the HTTP status is not used to classify the result.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HOST};
use hyper::{Method, Request};
use hyper_util::rt::TokioIo;
use rerouter_core::{Credentials, RpcRequest, RpcResponse};
use tokio::net::TcpStream;

use crate::{NodeError, NodeTransport};

/// Production [`NodeTransport`]: JSON-RPC over plain HTTP to a local node.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    host: IpAddr,
    credentials: Credentials,
}

impl HttpTransport {
    /// Transport that talks to a node on `127.0.0.1`.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self::with_host(IpAddr::V4(Ipv4Addr::LOCALHOST), credentials)
    }

    /// Transport that talks to a node on an arbitrary host.
    #[must_use]
    pub fn with_host(host: IpAddr, credentials: Credentials) -> Self {
        Self { host, credentials }
    }

    async fn connect(addr: SocketAddr) -> Result<TcpStream, NodeError> {
        TcpStream::connect(addr).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::ConnectionRefused {
                NodeError::Unreachable { addr }
            } else {
                NodeError::Connect { addr, source: e }
            }
        })
    }
}

#[async_trait]
impl NodeTransport for HttpTransport {
    async fn call(&self, port: u16, request: &RpcRequest) -> Result<RpcResponse, NodeError> {
        let addr = SocketAddr::new(self.host, port);
        let stream = Self::connect(addr).await?;
        let io = TokioIo::new(stream);

        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .map_err(|e| NodeError::Http(format!("handshake with {addr}: {e}")))?;

        // Drive the connection in the background.
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::debug!("node connection closed: {e}");
            }
        });

        let body = serde_json::to_vec(request)
            .map(Bytes::from)
            .map_err(|e| NodeError::Http(format!("encode request: {e}")))?;

        let req = Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(HOST, addr.to_string())
            .header(CONTENT_TYPE, "text/plain;")
            .header(CONTENT_LENGTH, body.len())
            .header(AUTHORIZATION, self.credentials.basic_auth_header())
            .body(Full::new(body))
            .map_err(|e| NodeError::Http(format!("build request: {e}")))?;

        let resp = sender
            .send_request(req)
            .await
            .map_err(|e| NodeError::Http(format!("send request: {e}")))?;

        let status = resp.status();
        let bytes = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| NodeError::Http(format!("read response body: {e}")))?
            .to_bytes();

        tracing::debug!(
            method = %request.method,
            port,
            status = %status,
            len = bytes.len(),
            "node responded"
        );

        Ok(serde_json::from_slice(&bytes)?)
    }
}
