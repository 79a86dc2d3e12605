//! Definitions of network parameters.

pub mod genesis;
pub mod network;

#[cfg(test)]
mod tests;

pub use genesis::GenesisBlock;
pub use network::{magics, InvalidNetworkError, Magic, Network};
