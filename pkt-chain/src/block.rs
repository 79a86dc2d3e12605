//! Blocks and block-related structures.

mod hash;
mod header;
mod height;
mod serialize;

pub mod merkle;

#[cfg(test)]
mod tests;

pub use hash::Hash;
pub use header::{Header, BLOCK_HEADER_LENGTH};
pub use height::Height;
pub use serialize::BlockEncoding;

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{transaction, work::proof::ProofSection};

/// A block: a block header, an optional proof section, and a list of
/// transactions.
///
/// The proof section is present only on blocks using the extended encoding;
/// blocks using the base Bitcoin encoding have no slot for it on the wire.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// The block header, which binds the rest of the block's data through
    /// the merkle root commitment.
    pub header: Header,
    /// The proof section carried between the header and the transaction
    /// list in the extended encoding, or `None` for base-encoded blocks.
    pub proof: Option<ProofSection>,
    /// The transactions in this block, in wire order.
    pub transactions: Vec<Arc<transaction::Transaction>>,
}

impl Block {
    /// Compute the identity hash of this block, the SHA-256d digest of its
    /// 80-byte serialized header.
    ///
    /// The proof section and the transactions do not enter the hash
    /// directly; the transactions are bound through the header's merkle
    /// root, and the proof section is not committed to at all.
    pub fn hash(&self) -> Hash {
        Hash::from(self)
    }

    /// Returns the coinbase transaction, if the first transaction in this
    /// block is a coinbase transaction.
    pub fn coinbase_transaction(&self) -> Option<&transaction::Transaction> {
        self.transactions
            .first()
            .map(AsRef::as_ref)
            .filter(|transaction| transaction.is_coinbase())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmter = f.debug_struct("Block");

        fmter.field("hash", &self.hash());
        fmter.field("transactions", &self.transactions.len());

        fmter.finish()
    }
}
