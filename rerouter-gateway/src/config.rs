//! Gateway configuration loaded once from the process environment.
//!
//! Parsing goes through [`GatewayConfig::from_lookup`], which takes the
//! variable lookup as a closure so tests never touch the real environment.
//! A `.env` file, if present, is merged into the environment first by
//! [`load_env_file`]; variables already set in the process win.

use std::{
    net::{Ipv4Addr, SocketAddr},
    num::ParseIntError,
    path::{Path, PathBuf},
};

use rerouter_core::{Allowlist, CoreError, Credentials, NodePorts, DEFAULT_MAINNET_RPC_PORT};

pub const ALLOWED_RPCS: &str = "ALLOWED_RPCS";
pub const RPC_CREDENTIALS: &str = "RPC_CREDENTIALS";
pub const PORT: &str = "PORT";
pub const RPC_PORT: &str = "RPC_PORT";
pub const TESTNET_RPC_PORT: &str = "TESTNET_RPC_PORT";
pub const HTTPS_CERTIFICATE_PATH: &str = "HTTPS_CERTIFICATE_PATH";
pub const HTTPS_KEY_PATH: &str = "HTTPS_KEY_PATH";

/// Port the gateway listens on when `PORT` is unset.
pub const DEFAULT_LISTEN_PORT: u16 = 3000;

/// Errors raised while reading the configuration. All of them abort startup.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("environment variable {var} was not set")]
    Missing { var: &'static str },

    /// A port variable is not a valid `u16`.
    #[error("environment variable {var}={value:?} is not a valid port: {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A variable was set but rejected by the domain type.
    #[error("environment variable {var} is invalid: {source}")]
    Invalid {
        var: &'static str,
        #[source]
        source: CoreError,
    },

    /// Only one of the two TLS paths was provided.
    #[error("{present} is set but {missing} is not; TLS needs both or neither")]
    IncompleteTls {
        present: &'static str,
        missing: &'static str,
    },
}

/// Certificate chain and private key, both PEM files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub certificate: PathBuf,
    pub key: PathBuf,
}

/// Immutable gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address the HTTP(S) listener binds to.
    pub listen: SocketAddr,
    /// RPC methods that may be forwarded.
    pub allowlist: Allowlist,
    /// Secret for the node's Basic auth.
    pub credentials: Credentials,
    /// Node RPC port per network.
    pub ports: NodePorts,
    /// TLS material; `None` serves plain HTTP.
    pub tls: Option<TlsPaths>,
}

impl GatewayConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// See [`GatewayConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    /// Returns [`ConfigError::Missing`] if `ALLOWED_RPCS` or `RPC_CREDENTIALS`
    /// is unset, [`ConfigError::InvalidPort`] for a malformed port,
    /// [`ConfigError::Invalid`] if the allowlist has no names, and
    /// [`ConfigError::IncompleteTls`] if only one TLS path is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.is_empty());

        let allowed = get(ALLOWED_RPCS).ok_or(ConfigError::Missing { var: ALLOWED_RPCS })?;
        let allowlist = Allowlist::from_csv(&allowed)
            .map_err(|source| ConfigError::Invalid { var: ALLOWED_RPCS, source })?;

        let secret = get(RPC_CREDENTIALS).ok_or(ConfigError::Missing { var: RPC_CREDENTIALS })?;
        let credentials = Credentials::new(secret)
            .map_err(|source| ConfigError::Invalid { var: RPC_CREDENTIALS, source })?;

        let listen_port = parse_port(PORT, get(PORT))?.unwrap_or(DEFAULT_LISTEN_PORT);
        let mainnet = parse_port(RPC_PORT, get(RPC_PORT))?.unwrap_or(DEFAULT_MAINNET_RPC_PORT);
        let testnet = parse_port(TESTNET_RPC_PORT, get(TESTNET_RPC_PORT))?;

        let tls = match (get(HTTPS_CERTIFICATE_PATH), get(HTTPS_KEY_PATH)) {
            (Some(certificate), Some(key)) => Some(TlsPaths {
                certificate: certificate.into(),
                key: key.into(),
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::IncompleteTls {
                    present: HTTPS_CERTIFICATE_PATH,
                    missing: HTTPS_KEY_PATH,
                })
            }
            (None, Some(_)) => {
                return Err(ConfigError::IncompleteTls {
                    present: HTTPS_KEY_PATH,
                    missing: HTTPS_CERTIFICATE_PATH,
                })
            }
        };

        Ok(Self {
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, listen_port)),
            allowlist,
            credentials,
            ports: NodePorts::new(mainnet, testnet),
            tls,
        })
    }
}

/// Loads `KEY=VALUE` lines from a `.env` file into the process environment.
///
/// With `None` the file is searched for from the current directory upwards.
/// Returns the path that was loaded, or `None` when no file exists.
///
/// # Errors
/// Returns the [`dotenvy::Error`] for a file that exists but cannot be read
/// or parsed.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, dotenvy::Error> {
    let loaded = match path {
        None => dotenvy::dotenv(),
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
    };
    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

fn parse_port(var: &'static str, value: Option<String>) -> Result<Option<u16>, ConfigError> {
    value
        .map(|v| {
            v.parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { var, value: v.clone(), source })
        })
        .transpose()
}
