//! Fuzz target: allowlist parsing from `ALLOWED_RPCS`.
//!
//! Every non-empty comma-separated entry must be allowed and the empty
//! method name must never be.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rerouter_core::Allowlist;

fuzz_target!(|data: &[u8]| {
    let Ok(csv) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(list) = Allowlist::from_csv(csv) else {
        assert!(csv.split(',').all(str::is_empty));
        return;
    };
    assert!(!list.contains(""));
    for entry in csv.split(',').filter(|e| !e.is_empty()) {
        assert!(list.contains(entry));
    }
});
