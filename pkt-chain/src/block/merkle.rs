//! The Bitcoin-style binary hash tree committing a block header to its
//! transactions.

use std::{fmt, io::Write};

use hex::{FromHex, ToHex};
use serde::{Deserialize, Serialize};

use crate::{
    serialization::{sha256d, BytesInDisplayOrder},
    transaction::{self, Transaction},
};

/// The root of the binary SHA-256d hash tree over a block's transaction
/// identity hashes.
///
/// The tree is built bottom-up over the transaction hashes in block order.
/// At each level, adjacent pairs are concatenated in serialized byte order
/// and hashed with SHA-256d; a level with an odd number of nodes duplicates
/// its final node to complete the last pair. A single-transaction block's
/// root is that transaction's hash itself.
///
/// Note that because of how it is constructed, this tree is malleable: a
/// level with a duplicated final node produces the same root as one where
/// that node genuinely appears twice. The root is a commitment to the
/// transaction list only for blocks whose transaction hashes are distinct.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub struct Root(pub [u8; 32]);

fn hash(h1: &[u8; 32], h2: &[u8; 32]) -> [u8; 32] {
    let mut w = sha256d::Writer::default();
    w.write_all(h1).unwrap();
    w.write_all(h2).unwrap();
    w.finish()
}

impl<T> FromIterator<T> for Root
where
    T: AsRef<Transaction>,
{
    fn from_iter<I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        transactions
            .into_iter()
            .map(|tx| tx.as_ref().hash())
            .collect()
    }
}

impl FromIterator<transaction::Hash> for Root {
    /// # Panics
    ///
    /// When there are no transactions in the iterator. This is impossible
    /// for valid blocks, since every block must have a coinbase
    /// transaction.
    fn from_iter<I>(hashes: I) -> Self
    where
        I: IntoIterator<Item = transaction::Hash>,
    {
        let mut hashes = hashes.into_iter().map(|hash| hash.0).collect::<Vec<_>>();

        while hashes.len() > 1 {
            hashes = hashes
                .chunks(2)
                .map(|chunk| match chunk {
                    [h1, h2] => hash(h1, h2),
                    [h1] => hash(h1, h1),
                    _ => unreachable!("chunks(2)"),
                })
                .collect();
        }

        Self(hashes[0])
    }
}

impl BytesInDisplayOrder for Root {
    fn bytes_in_serialized_order(&self) -> [u8; 32] {
        self.0
    }

    fn from_bytes_in_serialized_order(bytes: [u8; 32]) -> Self {
        Root(bytes)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.encode_hex::<String>())
    }
}

impl fmt::Debug for Root {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("merkle::Root")
            .field(&self.encode_hex::<String>())
            .finish()
    }
}

impl ToHex for &Root {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        self.bytes_in_display_order().encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        self.bytes_in_display_order().encode_hex_upper()
    }
}

impl ToHex for Root {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        (&self).encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        (&self).encode_hex_upper()
    }
}

impl FromHex for Root {
    type Error = <[u8; 32] as FromHex>::Error;

    fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, Self::Error> {
        let root = <[u8; 32]>::from_hex(hex)?;

        Ok(Self::from_bytes_in_display_order(&root))
    }
}

impl std::str::FromStr for Root {
    type Err = crate::serialization::SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0; 32];
        if hex::decode_to_slice(s, &mut bytes[..]).is_err() {
            Err(crate::serialization::SerializationError::Parse(
                "hex decoding error",
            ))
        } else {
            Ok(Self::from_bytes_in_display_order(&bytes))
        }
    }
}
