//! Transactions and transaction-related structures.

mod hash;
mod lock_time;
mod serialize;

#[cfg(test)]
mod tests;

pub use hash::Hash;
pub use lock_time::LockTime;

use serde::{Deserialize, Serialize};

use crate::transparent;

/// A transaction: a versioned list of inputs and outputs with a lock time.
///
/// The input and output orders are insertion orders and are significant,
/// because they are part of the serialized form the identity hash is
/// computed over.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The transaction version.
    pub version: i32,
    /// The transparent inputs, in wire order.
    pub inputs: Vec<transparent::Input>,
    /// The transparent outputs, in wire order.
    pub outputs: Vec<transparent::Output>,
    /// The earliest time or block height at which this transaction may be
    /// included in a block.
    pub lock_time: LockTime,
}

impl Transaction {
    /// Compute the identity hash of this transaction: the SHA-256d digest of
    /// its full serialized byte form.
    pub fn hash(&self) -> Hash {
        Hash::from(self)
    }

    /// Returns `true` if this transaction is a coinbase transaction: a
    /// single input spending the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].is_coinbase()
    }
}
