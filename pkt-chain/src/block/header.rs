use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::work::difficulty::CompactDifficulty;

use super::{merkle, Hash};

/// A block header, containing metadata about a block.
///
/// How are blocks chained together? They are chained together via the
/// backwards reference (previous header hash) present in the block header.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// The block's version field.
    pub version: i32,

    /// The hash of the previous block, used to create the chain of blocks
    /// back to the genesis block. The genesis block itself carries the
    /// all-zero hash here.
    pub previous_block_hash: Hash,

    /// The root of the merkle tree over this block's transaction identity
    /// hashes, committing the header to the transaction list.
    pub merkle_root: merkle::Root,

    /// The block timestamp, serialized as seconds since the Unix epoch.
    pub time: DateTime<Utc>,

    /// The difficulty threshold this block's hash must meet, in compact
    /// 32-bit form.
    pub difficulty_threshold: CompactDifficulty,

    /// An arbitrary field that miners modify in their search for a block
    /// hash below the difficulty threshold.
    pub nonce: u32,
}

impl Header {
    /// Compute the hash of this header, the block's identity hash.
    pub fn hash(&self) -> Hash {
        Hash::from(self)
    }
}

/// The serialized byte length of a block header.
///
/// The header consists of a 4-byte version, two 32-byte hashes, and three
/// more 4-byte fields.
pub const BLOCK_HEADER_LENGTH: usize = 4 + 32 + 32 + 4 + 4 + 4;
