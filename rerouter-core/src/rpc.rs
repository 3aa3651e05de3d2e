//! JSON-RPC 1.0 envelope sent to the node and the response it returns.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::params::RpcParam;

/// Protocol version tag carried by every outbound request.
pub const JSONRPC_VERSION: &str = "1.0";

/// Fixed request identifier. Requests are never multiplexed on one
/// connection, so a constant id is sufficient.
pub const REQUEST_ID: &str = "pivxRerouter";

/// Largest float magnitude whose integral value converts to `i64` exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Outbound JSON-RPC request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: &'static str,
    pub method: String,
    pub params: Vec<RpcParam>,
}

impl RpcRequest {
    #[must_use]
    pub fn new(method: impl Into<String>, params: Vec<RpcParam>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: REQUEST_ID,
            method: method.into(),
            params,
        }
    }
}

/// Response body returned by the node.
///
/// Both fields are kept as raw JSON. Nodes send `"error": null` on success,
/// and an error is any truthy value, not only a well-formed error object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Value,
}

/// What the node said, reduced to the two cases the gateway distinguishes.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcOutcome {
    /// The call succeeded with this result value.
    Success(Value),
    /// The node reported an error with this message.
    Failure(String),
}

impl RpcResponse {
    /// A truthy `error` wins over any `result`.
    #[must_use]
    pub fn into_outcome(self) -> RpcOutcome {
        if is_truthy(&self.error) {
            RpcOutcome::Failure(error_message(&self.error))
        } else {
            RpcOutcome::Success(self.result)
        }
    }
}

/// JSON text of a successful result.
///
/// Floats with no fractional part are written as integers, so a balance of
/// `100.00000000` is relayed as `100` rather than `100.0`.
#[must_use]
pub fn render_result(result: Value) -> String {
    integral_floats(result).to_string()
}

// null, false, 0 and "" are falsy; everything else, including {} and [],
// is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn error_message(error: &Value) -> String {
    match error.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn integral_floats(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(as_integer(&n).unwrap_or(n)),
        Value::Array(items) => Value::Array(items.into_iter().map(integral_floats).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, v)| (key, integral_floats(v)))
                .collect(),
        ),
        other => other,
    }
}

fn as_integer(n: &Number) -> Option<Number> {
    if !n.is_f64() {
        return None;
    }
    let f = n.as_f64()?;
    if f.fract() != 0.0 || f.abs() >= MAX_EXACT_INTEGER {
        return None;
    }
    #[expect(clippy::cast_possible_truncation, reason = "f is integral and below 2^53")]
    let integer = f as i64;
    Some(Number::from(integer))
}
