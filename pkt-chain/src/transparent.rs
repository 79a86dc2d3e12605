//! Transparent transaction inputs and outputs.

mod script;
mod serialize;

pub use script::Script;

use serde::{Deserialize, Serialize};

use crate::{amount::Amount, transaction};

/// A reference to the output of an earlier transaction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// The identity hash of the transaction containing the referenced output.
    pub hash: transaction::Hash,
    /// The index of the referenced output in its transaction's output list.
    pub index: u32,
}

impl OutPoint {
    /// The distinguished null outpoint: an all-zero hash with index
    /// `0xffff_ffff`, used by coinbase inputs, which have no real
    /// predecessor.
    pub fn null() -> OutPoint {
        OutPoint {
            hash: transaction::Hash([0; 32]),
            index: u32::MAX,
        }
    }

    /// Returns `true` if this is the null (coinbase) outpoint.
    pub fn is_null(&self) -> bool {
        *self == Self::null()
    }
}

/// A transparent transaction input.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// The outpoint this input spends.
    pub outpoint: OutPoint,
    /// The script satisfying the spent output's locking conditions.
    ///
    /// For coinbase inputs the payload is arbitrary; the main-network
    /// genesis coinbase famously embeds a newspaper headline here.
    pub unlock_script: Script,
    /// The sequence number.
    pub sequence: u32,
}

impl Input {
    /// Returns `true` if this input spends the null outpoint, which marks
    /// the coinbase input of a block's first transaction.
    pub fn is_coinbase(&self) -> bool {
        self.outpoint.is_null()
    }
}

/// A transparent transaction output.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// The value transferred to this output, in base units.
    pub value: Amount,
    /// The script defining the conditions for spending this output.
    pub lock_script: Script,
}
