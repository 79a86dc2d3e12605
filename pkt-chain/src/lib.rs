//! Blockchain data structures and consensus-critical serialization for the
//! PKT family of networks, including the canonical genesis block, derived
//! identity hash, and transaction merkle root for each supported network.
#![deny(missing_docs)]

pub mod amount;
pub mod block;
pub mod parameters;
pub mod serialization;
pub mod transaction;
pub mod transparent;
pub mod work;
