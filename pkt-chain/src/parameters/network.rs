//! The networks this crate describes, and their wire magic values.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A magic number identifying a network on the peer-to-peer wire.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Magic(pub [u8; 4]);

impl fmt::Debug for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Magic").field(&hex::encode(self.0)).finish()
    }
}

/// Magic numbers used to identify each network.
pub mod magics {
    use super::Magic;

    /// The production mainnet.
    pub const MAINNET: Magic = Magic([0xf9, 0xbe, 0xb4, 0xd9]);

    /// The public test network.
    pub const TESTNET: Magic = Magic([0x0b, 0x11, 0x09, 0x07]);

    /// The local regression test network.
    pub const REGTEST: Magic = Magic([0xfa, 0xbf, 0xb5, 0xda]);

    /// The simulation test network.
    pub const SIMNET: Magic = Magic([0x16, 0x1c, 0x14, 0x12]);

    /// The PacketCrypt test network.
    ///
    /// It deliberately reuses the mainnet magic, so mainnet tooling can
    /// speak to it unchanged.
    pub const PKT_TESTNET: Magic = MAINNET;
}

/// An enum describing the supported networks.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub enum Network {
    /// The production mainnet.
    #[default]
    Mainnet,
    /// The public test network, the third of its name.
    Testnet,
    /// The local regression test network, with trivially low difficulty.
    Regtest,
    /// The simulation test network, for private integration testing.
    Simnet,
    /// The PacketCrypt test network, whose genesis block uses the extended
    /// block encoding.
    PktTestnet,
}

impl Network {
    /// Returns an iterator over all the supported networks.
    pub fn iter() -> impl Iterator<Item = Network> {
        [
            Network::Mainnet,
            Network::Testnet,
            Network::Regtest,
            Network::Simnet,
            Network::PktTestnet,
        ]
        .into_iter()
    }

    /// Returns the magic value identifying this network on the wire.
    pub fn magic_value(&self) -> Magic {
        match self {
            Network::Mainnet => magics::MAINNET,
            Network::Testnet => magics::TESTNET,
            Network::Regtest => magics::REGTEST,
            Network::Simnet => magics::SIMNET,
            Network::PktTestnet => magics::PKT_TESTNET,
        }
    }

    /// Returns the lowercase network name, as used in configuration files
    /// and on the command line.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }
}

impl From<Network> for &'static str {
    fn from(network: Network) -> &'static str {
        match network {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
            Network::Simnet => "simnet",
            Network::PktTestnet => "pkttest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = InvalidNetworkError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" | "testnet3" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "simnet" => Ok(Network::Simnet),
            "pkttest" => Ok(Network::PktTestnet),
            _ => Err(InvalidNetworkError(string.to_owned())),
        }
    }
}

/// The name of an unsupported network.
///
/// Network identifiers outside the closed set of supported networks are
/// rejected at this parsing boundary, so the rest of the crate can treat
/// [`Network`] as total.
#[derive(Clone, Debug, Error)]
#[error("Invalid network: {0}")]
pub struct InvalidNetworkError(pub String);
