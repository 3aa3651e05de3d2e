//! Query-string parameter coercion.
//!
//! Parameters arrive as one comma-separated string (`?params=1,true,abc`).
//! Each token is turned into a typed JSON value by an ordered chain:
//! integer first, then the boolean literals, then plain text. A token is
//! only ever converted by the first rule that accepts it.

use serde::Serialize;

/// A single typed JSON-RPC parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RpcParam {
    Integer(i64),
    Bool(bool),
    Text(String),
}

impl RpcParam {
    /// Coerces one raw token.
    ///
    /// Only tokens that parse completely as a signed 64-bit decimal integer
    /// become [`RpcParam::Integer`]; `"2.5"`, `"1e3"` and `" 7"` stay text.
    #[must_use]
    pub fn coerce(token: &str) -> Self {
        if let Some(n) = Self::as_integer(token) {
            return RpcParam::Integer(n);
        }
        if let Some(b) = Self::as_bool(token) {
            return RpcParam::Bool(b);
        }
        RpcParam::Text(token.to_owned())
    }

    fn as_integer(token: &str) -> Option<i64> {
        token.parse().ok()
    }

    fn as_bool(token: &str) -> Option<bool> {
        match token {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

/// Splits and coerces a raw `params` value.
///
/// `None` and the empty string both yield no parameters. Empty tokens in a
/// non-empty list (`"a,,b"`) are kept as empty strings.
#[must_use]
pub fn parse_params(raw: Option<&str>) -> Vec<RpcParam> {
    match raw {
        None | Some("") => Vec::new(),
        Some(raw) => raw.split(',').map(RpcParam::coerce).collect(),
    }
}
