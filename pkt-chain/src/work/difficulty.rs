//! Block difficulty data structures.
//!
//! The block difficulty "target threshold" is stored in the block header as
//! a 32-bit `CompactDifficulty`. Expanding the threshold and comparing it
//! with header hashes is consensus-rule territory and happens elsewhere;
//! this module only preserves the bit pattern.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 32-bit "compact bits" value, which represents the difficulty threshold
/// for a block header.
///
/// This is a floating-point encoding, with a 24-bit signed mantissa,
/// an 8-bit exponent, an offset of 3, and a radix of 256.
///
/// The precise bit pattern of a `CompactDifficulty` value is
/// consensus-critical, because it is part of the block header, which is used
/// to create the block hash.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub struct CompactDifficulty(pub(crate) u32);

impl fmt::Debug for CompactDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("CompactDifficulty")
            // Use hex, because it's a float
            .field(&format_args!("{:#010x}", self.0))
            .finish()
    }
}

impl From<u32> for CompactDifficulty {
    fn from(bits: u32) -> Self {
        CompactDifficulty(bits)
    }
}

impl From<CompactDifficulty> for u32 {
    fn from(difficulty: CompactDifficulty) -> Self {
        difficulty.0
    }
}
