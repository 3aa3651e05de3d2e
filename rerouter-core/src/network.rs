use std::fmt;

/// Default JSON-RPC port of a mainnet PIVX node.
pub const DEFAULT_MAINNET_RPC_PORT: u16 = 51473;

/// Which node deployment a request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Both networks, mainnet first.
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Testnet];

    /// Lowercase name, also used as the route prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port lookup table for the node's local JSON-RPC endpoints.
///
/// Mainnet is always available. Testnet is optional; when it is `None` the
/// gateway does not serve testnet at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePorts {
    mainnet: u16,
    testnet: Option<u16>,
}

impl NodePorts {
    #[must_use]
    pub const fn new(mainnet: u16, testnet: Option<u16>) -> Self {
        Self { mainnet, testnet }
    }

    /// Returns the port bound to `network`, or `None` if it is not configured.
    #[must_use]
    pub const fn port(&self, network: Network) -> Option<u16> {
        match network {
            Network::Mainnet => Some(self.mainnet),
            Network::Testnet => self.testnet,
        }
    }

    /// Returns `true` if `network` has a port configured.
    #[must_use]
    pub const fn is_enabled(&self, network: Network) -> bool {
        self.port(network).is_some()
    }

    /// Iterates the configured networks with their ports.
    pub fn enabled(&self) -> impl Iterator<Item = (Network, u16)> + '_ {
        Network::ALL
            .into_iter()
            .filter_map(move |network| self.port(network).map(|port| (network, port)))
    }
}

impl Default for NodePorts {
    fn default() -> Self {
        Self::new(DEFAULT_MAINNET_RPC_PORT, None)
    }
}
