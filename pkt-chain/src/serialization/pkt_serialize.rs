use std::io;

use super::WritePktExt;

/// Consensus-critical serialization.
///
/// This trait provides a generic serialization for consensus-critical
/// wire formats, such as transactions and blocks. It is intended for use
/// only in consensus-critical contexts; in other contexts, such as internal
/// storage, it would be preferable to use Serde.
pub trait PktSerialize: Sized {
    /// Write `self` to the given `writer` using the canonical format.
    ///
    /// This function has a `pkt_` prefix to alert the reader that the
    /// serialization in use is consensus-critical serialization, rather than
    /// some other kind of serialization.
    ///
    /// Notice that the error type is [`std::io::Error`]; this indicates that
    /// serialization MUST be infallible up to errors in the underlying writer.
    /// In other words, any type implementing `PktSerialize` must make illegal
    /// states unrepresentable.
    fn pkt_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error>;

    /// Helper function to construct a vec to serialize the current struct into
    fn pkt_serialize_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut data = Vec::new();
        self.pkt_serialize(&mut data)?;
        Ok(data)
    }
}

/// Serialize a `Vec` as a compactsize number of items, then the items. This
/// is the most common wire format.
impl<T: PktSerialize> PktSerialize for Vec<T> {
    fn pkt_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_compactsize(self.len() as u64)?;
        pkt_serialize_external_count(self, writer)
    }
}

/// Serialize a byte vector as a compactsize length, then the bytes.
///
/// # Correctness
///
/// Most wire types have specific rules about serialization of `Vec<u8>`s.
/// Check the format before using this function.
//
// we specifically want to serialize `Vec`s here, rather than generic slices
#[allow(clippy::ptr_arg)]
pub fn pkt_serialize_bytes<W: io::Write>(vec: &Vec<u8>, mut writer: W) -> Result<(), io::Error> {
    writer.write_compactsize(vec.len() as u64)?;
    pkt_serialize_bytes_external_count(vec, writer)
}

/// Serialize a typed `Vec` **without** writing the number of items as a
/// compactsize.
///
/// Use `pkt_serialize_external_count` when the item count was already
/// written or is fixed by a consensus rule; use `Vec::pkt_serialize` for
/// data that contains the compactsize count followed by the items.
//
// we specifically want to serialize `Vec`s here, rather than generic slices
#[allow(clippy::ptr_arg)]
pub fn pkt_serialize_external_count<W: io::Write, T: PktSerialize>(
    vec: &Vec<T>,
    mut writer: W,
) -> Result<(), io::Error> {
    for x in vec {
        x.pkt_serialize(&mut writer)?;
    }
    Ok(())
}

/// Serialize a raw byte `Vec` **without** writing the number of items as a
/// compactsize.
///
/// This is a convenience alias for `writer.write_all(&vec)`.
//
// we specifically want to serialize `Vec`s here, rather than generic slices
#[allow(clippy::ptr_arg)]
pub fn pkt_serialize_bytes_external_count<W: io::Write>(
    vec: &Vec<u8>,
    mut writer: W,
) -> Result<(), io::Error> {
    writer.write_all(vec)
}

/// The maximum length of a network protocol message, in bytes.
///
/// This value is used to calculate safe preallocation limits for some types.
pub const MAX_PROTOCOL_MESSAGE_LEN: usize = 32 * 1024 * 1024;
