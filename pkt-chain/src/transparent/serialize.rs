use std::io;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::{
    serialization::{
        OrTruncatedExt, PktDeserialize, PktDeserializeInto, PktSerialize, ReadPktExt,
        SerializationError, TrustedPreallocate, MAX_PROTOCOL_MESSAGE_LEN,
    },
    transaction,
};

use super::{Input, OutPoint, Output, Script};

impl PktSerialize for OutPoint {
    fn pkt_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_all(&self.hash.0[..])?;
        writer.write_u32::<LittleEndian>(self.index)?;
        Ok(())
    }
}

impl PktDeserialize for OutPoint {
    fn pkt_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        Ok(OutPoint {
            hash: transaction::Hash(reader.read_32_bytes().or_truncated("outpoint hash")?),
            index: reader
                .read_u32::<LittleEndian>()
                .or_truncated("outpoint index")?,
        })
    }
}

impl PktSerialize for Input {
    fn pkt_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.outpoint.pkt_serialize(&mut writer)?;
        self.unlock_script.pkt_serialize(&mut writer)?;
        writer.write_u32::<LittleEndian>(self.sequence)?;
        Ok(())
    }
}

impl PktDeserialize for Input {
    fn pkt_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        Ok(Input {
            outpoint: OutPoint::pkt_deserialize(&mut reader)?,
            unlock_script: Script::pkt_deserialize(&mut reader)?,
            sequence: reader
                .read_u32::<LittleEndian>()
                .or_truncated("input sequence")?,
        })
    }
}

impl PktSerialize for Output {
    fn pkt_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.value.pkt_serialize(&mut writer)?;
        self.lock_script.pkt_serialize(&mut writer)?;
        Ok(())
    }
}

impl PktDeserialize for Output {
    fn pkt_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let reader = &mut reader;

        Ok(Output {
            value: reader.pkt_deserialize_into()?,
            lock_script: Script::pkt_deserialize(reader)?,
        })
    }
}

/// The minimum serialized input: a 36-byte outpoint, a one-byte script
/// length, and a 4-byte sequence.
const MIN_INPUT_LEN: u64 = 36 + 1 + 4;

/// The minimum serialized output: an 8-byte value and a one-byte script
/// length.
const MIN_OUTPUT_LEN: u64 = 8 + 1;

impl TrustedPreallocate for Input {
    fn max_allocation() -> u64 {
        MAX_PROTOCOL_MESSAGE_LEN as u64 / MIN_INPUT_LEN
    }
}

impl TrustedPreallocate for Output {
    fn max_allocation() -> u64 {
        MAX_PROTOCOL_MESSAGE_LEN as u64 / MIN_OUTPUT_LEN
    }
}
