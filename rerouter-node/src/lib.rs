//! Outbound side of the PIVX rerouter.
//!
//! Sends JSON-RPC requests to the node's local RPC port and classifies
//! transport failures so the gateway can map them to HTTP statuses.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

mod error;
mod http_client;
mod transport;

pub use error::NodeError;
pub use http_client::HttpTransport;
pub use transport::NodeTransport;
