use std::io;

use super::{OrTruncatedExt, ReadPktExt, SerializationError, MAX_PROTOCOL_MESSAGE_LEN};

/// Consensus-critical deserialization.
///
/// This trait provides a generic deserialization for consensus-critical
/// wire formats, such as transactions and blocks. It is intended for use
/// only in consensus-critical contexts; in other contexts, such as internal
/// storage, it would be preferable to use Serde.
pub trait PktDeserialize: Sized {
    /// Try to read `self` from the given `reader`.
    ///
    /// This function has a `pkt_` prefix to alert the reader that the
    /// serialization in use is consensus-critical serialization, rather than
    /// some other kind of serialization.
    fn pkt_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError>;
}

/// Deserialize a `Vec`, where the number of items is set by a compactsize
/// prefix in the data. This is the most common wire format.
impl<T: PktDeserialize + TrustedPreallocate> PktDeserialize for Vec<T> {
    fn pkt_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let len = reader.read_compactsize()?.try_into()?;
        pkt_deserialize_external_count(len, reader)
    }
}

/// Implement PktDeserialize for Vec<u8> directly instead of using the blanket
/// Vec implementation.
///
/// This allows us to optimize the inner loop into a single call to
/// `read_exact()`. Note that we don't implement TrustedPreallocate for u8.
/// This allows the optimization without relying on specialization.
impl PktDeserialize for Vec<u8> {
    fn pkt_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let len = reader.read_compactsize()?.try_into()?;
        pkt_deserialize_bytes_external_count(len, reader)
    }
}

/// Deserialize a `Vec` containing `external_count` items.
///
/// Use `pkt_deserialize_external_count` when the item count was already read
/// from the data or is fixed by a consensus rule; use `Vec::pkt_deserialize`
/// for data that contains the compactsize count followed by the items.
pub fn pkt_deserialize_external_count<R: io::Read, T: PktDeserialize + TrustedPreallocate>(
    external_count: usize,
    mut reader: R,
) -> Result<Vec<T>, SerializationError> {
    match u64::try_from(external_count) {
        Ok(external_count) if external_count > T::max_allocation() => {
            return Err(SerializationError::Parse(
                "Vector longer than max_allocation",
            ))
        }
        Ok(_) => {}
        // usize is less than or equal to 64 bits on all supported Rust
        // platforms, so in practice this error is impossible.
        Err(_) => return Err(SerializationError::Parse("Vector longer than u64::MAX")),
    }
    let mut vec = Vec::with_capacity(external_count);
    for _ in 0..external_count {
        vec.push(T::pkt_deserialize(&mut reader)?);
    }
    Ok(vec)
}

/// `pkt_deserialize_external_count`, specialised for raw bytes.
///
/// This allows us to optimize the inner loop into a single call to
/// `read_exact()`.
pub fn pkt_deserialize_bytes_external_count<R: io::Read>(
    external_count: usize,
    mut reader: R,
) -> Result<Vec<u8>, SerializationError> {
    if external_count > MAX_U8_ALLOCATION {
        return Err(SerializationError::Parse(
            "Byte vector longer than MAX_U8_ALLOCATION",
        ));
    }
    let mut vec = vec![0u8; external_count];
    reader.read_exact(&mut vec).or_truncated("byte vector")?;
    Ok(vec)
}

/// Helper for deserializing more succinctly via type inference
pub trait PktDeserializeInto {
    /// Deserialize based on type inference
    fn pkt_deserialize_into<T>(self) -> Result<T, SerializationError>
    where
        T: PktDeserialize;
}

impl<R: io::Read> PktDeserializeInto for R {
    fn pkt_deserialize_into<T>(self) -> Result<T, SerializationError>
    where
        T: PktDeserialize,
    {
        T::pkt_deserialize(self)
    }
}

/// Blind preallocation of a Vec<T: TrustedPreallocate> is based on a bounded
/// length. This is in contrast to blind preallocation of a generic Vec<T>,
/// which is a DoS vector.
///
/// The max_allocation() function provides a loose upper bound on the size of
/// the Vec<T: TrustedPreallocate> which can possibly be received from an
/// honest peer.
pub trait TrustedPreallocate {
    /// Provides a ***loose upper bound*** on the size of the
    /// Vec<T: TrustedPreallocate> which can possibly be received from an
    /// honest peer.
    fn max_allocation() -> u64;
}

/// The length of the longest valid `Vec<u8>` that can be received over the
/// network.
///
/// It takes 5 bytes to encode a compactsize representing any number between
/// 2^16 and (2^32 - 1), so the largest `Vec<u8>` that fits in a protocol
/// message is (MAX_PROTOCOL_MESSAGE_LEN - 5).
pub(crate) const MAX_U8_ALLOCATION: usize = MAX_PROTOCOL_MESSAGE_LEN - 5;
