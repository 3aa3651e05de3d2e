/// Errors produced by the `rerouter-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The allowlist contained no usable method names.
    #[error("allowlist is empty: at least one RPC method name is required")]
    EmptyAllowlist,

    /// The node credentials string was empty.
    #[error("RPC credentials must not be empty")]
    EmptyCredentials,
}
