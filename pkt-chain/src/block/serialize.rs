//! Serialization and deserialization for block headers and blocks.

use std::io;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    serialization::{
        pkt_deserialize_external_count, OrTruncatedExt, PktDeserialize, PktSerialize, ReadPktExt,
        SerializationError, TrackedReader,
    },
    work::{difficulty::CompactDifficulty, proof::ProofSection},
};

use super::{merkle, Block, Hash, Header};

/// The wire layout used for a block.
///
/// The base encoding is the Bitcoin block format: an 80-byte header followed
/// by a compactsize-prefixed transaction list. The extended encoding carries
/// a [`ProofSection`] between the header and the transaction list.
///
/// The two encodings cannot be distinguished by inspecting the bytes, so the
/// caller must know which one a byte stream uses.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum BlockEncoding {
    /// The base Bitcoin block format, with no proof section.
    #[default]
    Base,
    /// The extended format with a proof section after the header.
    PacketCrypt,
}

impl PktSerialize for Header {
    #[allow(clippy::unwrap_in_result)]
    fn pkt_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_i32::<LittleEndian>(self.version)?;
        self.previous_block_hash.pkt_serialize(&mut writer)?;
        writer.write_all(&self.merkle_root.0[..])?;
        writer.write_u32::<LittleEndian>(
            self.time
                .timestamp()
                .try_into()
                .expect("deserialized and generated timestamps are u32 values"),
        )?;
        writer.write_u32::<LittleEndian>(self.difficulty_threshold.into())?;
        writer.write_u32::<LittleEndian>(self.nonce)?;

        Ok(())
    }
}

impl PktDeserialize for Header {
    #[allow(clippy::unwrap_in_result)]
    fn pkt_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let version = reader
            .read_i32::<LittleEndian>()
            .or_truncated("header version")?;
        let previous_block_hash =
            Hash(reader.read_32_bytes().or_truncated("previous block hash")?);
        let merkle_root = merkle::Root(reader.read_32_bytes().or_truncated("merkle root")?);
        let raw_time = reader.read_u32::<LittleEndian>().or_truncated("time")?;
        let difficulty_threshold = CompactDifficulty::from(
            reader
                .read_u32::<LittleEndian>()
                .or_truncated("difficulty threshold")?,
        );
        let nonce = reader.read_u32::<LittleEndian>().or_truncated("nonce")?;

        // All u32 values are valid `Utc.timestamp`s.
        let time = Utc
            .timestamp_opt(raw_time.into(), 0)
            .single()
            .expect("in-range number of seconds and valid nanosecond");

        Ok(Header {
            version,
            previous_block_hash,
            merkle_root,
            time,
            difficulty_threshold,
            nonce,
        })
    }
}

impl Block {
    /// Try to read a block from `reader` using the given wire `encoding`.
    ///
    /// A truncated input produces a [`SerializationError::Truncated`] whose
    /// offset is the number of bytes consumed before input ran out.
    pub fn pkt_deserialize_with<R: io::Read>(
        reader: R,
        encoding: BlockEncoding,
    ) -> Result<Self, SerializationError> {
        let mut reader = TrackedReader::new(reader);

        let block = Self::pkt_deserialize_inner(&mut reader, encoding);

        block.map_err(|e| e.at_offset(reader.position()))
    }

    fn pkt_deserialize_inner<R: io::Read>(
        reader: &mut R,
        encoding: BlockEncoding,
    ) -> Result<Block, SerializationError> {
        let header = Header::pkt_deserialize(&mut *reader)?;

        let proof = match encoding {
            BlockEncoding::Base => None,
            BlockEncoding::PacketCrypt => Some(ProofSection::pkt_deserialize(&mut *reader)?),
        };

        let transaction_count = reader
            .read_compactsize()
            .map_err(|e| e.with_field("transaction count"))?;
        let transactions =
            pkt_deserialize_external_count(transaction_count.try_into()?, &mut *reader)?;

        Ok(Block {
            header,
            proof,
            transactions,
        })
    }
}

impl PktSerialize for Block {
    fn pkt_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.header.pkt_serialize(&mut writer)?;
        if let Some(proof) = &self.proof {
            proof.pkt_serialize(&mut writer)?;
        }
        self.transactions.pkt_serialize(&mut writer)?;
        Ok(())
    }
}

/// Blocks using the base encoding, as produced by `pkt_serialize` on a block
/// whose `proof` is `None`.
impl PktDeserialize for Block {
    fn pkt_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError> {
        Self::pkt_deserialize_with(reader, BlockEncoding::Base)
    }
}
