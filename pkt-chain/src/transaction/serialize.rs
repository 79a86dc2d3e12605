//! Serialization and deserialization for transactions.

use std::{io, sync::Arc};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::serialization::{
    pkt_deserialize_external_count, OrTruncatedExt, PktDeserialize, PktSerialize, ReadPktExt,
    SerializationError, TrackedReader, TrustedPreallocate, MAX_PROTOCOL_MESSAGE_LEN,
};

use super::{LockTime, Transaction};

impl PktSerialize for Transaction {
    fn pkt_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_i32::<LittleEndian>(self.version)?;
        self.inputs.pkt_serialize(&mut writer)?;
        self.outputs.pkt_serialize(&mut writer)?;
        self.lock_time.pkt_serialize(&mut writer)?;
        Ok(())
    }
}

impl PktDeserialize for Transaction {
    fn pkt_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError> {
        let mut reader = TrackedReader::new(reader);

        let transaction = Self::pkt_deserialize_inner(&mut reader);

        transaction.map_err(|e| e.at_offset(reader.position()))
    }
}

impl Transaction {
    fn pkt_deserialize_inner<R: io::Read>(
        reader: &mut R,
    ) -> Result<Transaction, SerializationError> {
        let version = reader
            .read_i32::<LittleEndian>()
            .or_truncated("transaction version")?;

        let input_count = reader
            .read_compactsize()
            .map_err(|e| e.with_field("input count"))?;
        let inputs = pkt_deserialize_external_count(input_count.try_into()?, &mut *reader)?;

        let output_count = reader
            .read_compactsize()
            .map_err(|e| e.with_field("output count"))?;
        let outputs = pkt_deserialize_external_count(output_count.try_into()?, &mut *reader)?;

        let lock_time = LockTime::pkt_deserialize(reader)?;

        Ok(Transaction {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }
}

impl<T> PktSerialize for Arc<T>
where
    T: PktSerialize,
{
    fn pkt_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error> {
        T::pkt_serialize(self, writer)
    }
}

impl<T> PktDeserialize for Arc<T>
where
    T: PktDeserialize,
{
    fn pkt_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError> {
        Ok(Arc::new(T::pkt_deserialize(reader)?))
    }
}

impl<T> TrustedPreallocate for Arc<T>
where
    T: TrustedPreallocate,
{
    fn max_allocation() -> u64 {
        T::max_allocation()
    }
}

/// A serialized transaction is at least 10 bytes: a 4-byte version, two
/// one-byte counts, and a 4-byte lock time.
const MIN_TRANSACTION_SIZE: u64 = 4 + 1 + 1 + 4;

impl TrustedPreallocate for Transaction {
    fn max_allocation() -> u64 {
        MAX_PROTOCOL_MESSAGE_LEN as u64 / MIN_TRANSACTION_SIZE
    }
}
