//! Fuzz target: `params` query-string coercion.
//!
//! Parsing must never panic, must yield one parameter per comma-separated
//! token, and must always produce a serializable JSON array.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rerouter_core::{parse_params, RpcParam};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let params = parse_params(Some(raw));
    if raw.is_empty() {
        assert!(params.is_empty());
    } else {
        assert_eq!(params.len(), raw.split(',').count());
    }
    for (param, token) in params.iter().zip(raw.split(',')) {
        if let RpcParam::Text(text) = param {
            assert_eq!(text, token, "text tokens must pass through unchanged");
        }
    }
    assert!(serde_json::to_string(&params).is_ok());
});
