//! Fuzz target: decoding of node response bodies.
//!
//! Arbitrary bytes from the node must either decode into an `RpcResponse`
//! or fail cleanly; reducing a decoded response to an outcome must not panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rerouter_core::{RpcOutcome, RpcResponse};

fuzz_target!(|data: &[u8]| {
    if let Ok(resp) = serde_json::from_slice::<RpcResponse>(data) {
        match resp.into_outcome() {
            RpcOutcome::Success(value) => {
                let _ = value.to_string();
            }
            RpcOutcome::Failure(message) => {
                let _ = message.len();
            }
        }
    }
});
