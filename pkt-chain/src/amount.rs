//! Currency amounts, in the smallest on-chain unit.

use std::{fmt, io};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};

use crate::serialization::{OrTruncatedExt, PktDeserialize, PktSerialize, SerializationError};

/// The number of base units in one coin.
pub const COIN: i64 = 100_000_000;

/// A transparent output value, in base units.
///
/// Serialized as a signed 64-bit little-endian integer. Negative values are
/// representable because the wire format is signed, not because they are
/// meaningful on chain.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub struct Amount(i64);

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Amount").field(&self.0).finish()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(value)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl PktSerialize for Amount {
    fn pkt_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_i64::<LittleEndian>(self.0)
    }
}

impl PktDeserialize for Amount {
    fn pkt_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        Ok(Amount(
            reader
                .read_i64::<LittleEndian>()
                .or_truncated("output value")?,
        ))
    }
}
