//! Proof-of-work sections attached to blocks on networks that use the
//! extended block envelope.
//!
//! On the wire the section sits between the block header and the
//! transaction list, as a sequence of (kind, length, payload) entries
//! terminated by a kind-0, length-0 entry. The payload layout is network
//! specific, so it is carried as raw bytes and round-tripped without
//! interpretation; none of it feeds into header or transaction hashing.

use std::{fmt, io};

use serde::{Deserialize, Serialize};

use crate::serialization::{
    pkt_deserialize_bytes_external_count, PktDeserialize, PktSerialize, ReadPktExt,
    SerializationError, WritePktExt,
};

/// One entry in a block's attached proof-of-work section.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProofEntity {
    /// The entry kind. Kind 0 is reserved for the section terminator, so
    /// entries must not use it.
    pub kind: u64,
    /// The opaque payload bytes.
    pub payload: Vec<u8>,
}

impl fmt::Debug for ProofEntity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ProofEntity")
            .field("kind", &self.kind)
            .field("payload", &hex::encode(&self.payload))
            .finish()
    }
}

/// The proof-of-work section attached to a block.
///
/// Entries keep their decoded order, so re-serializing a decoded section
/// reproduces the original bytes exactly.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProofSection {
    /// The section entries, in wire order.
    pub entities: Vec<ProofEntity>,
}

impl PktSerialize for ProofSection {
    fn pkt_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        for entity in &self.entities {
            writer.write_compactsize(entity.kind)?;
            writer.write_compactsize(entity.payload.len() as u64)?;
            writer.write_all(&entity.payload)?;
        }
        // kind-0, length-0 terminator
        writer.write_compactsize(0)?;
        writer.write_compactsize(0)?;
        Ok(())
    }
}

impl PktDeserialize for ProofSection {
    fn pkt_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let mut entities = Vec::new();
        loop {
            let kind = reader
                .read_compactsize()
                .map_err(|e| e.with_field("proof entity kind"))?;
            let len = reader
                .read_compactsize()
                .map_err(|e| e.with_field("proof entity length"))?;
            if kind == 0 {
                if len != 0 {
                    return Err(SerializationError::Parse(
                        "proof section terminator has a payload",
                    ));
                }
                return Ok(ProofSection { entities });
            }
            let payload = pkt_deserialize_bytes_external_count(len.try_into()?, &mut reader)
                .map_err(|e| e.with_field("proof entity payload"))?;
            entities.push(ProofEntity { kind, payload });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::PktDeserializeInto;

    #[test]
    fn proof_section_roundtrip() {
        let section = ProofSection {
            entities: vec![
                ProofEntity {
                    kind: 1,
                    payload: vec![0xab; 300],
                },
                ProofEntity {
                    kind: 7,
                    payload: Vec::new(),
                },
            ],
        };

        let bytes = section.pkt_serialize_to_vec().unwrap();
        // kind 1 + length fd2c01 + payload, kind 7 + length 0, terminator
        assert_eq!(bytes.len(), 1 + 3 + 300 + 1 + 1 + 2);

        let parsed: ProofSection = bytes.as_slice().pkt_deserialize_into().unwrap();
        assert_eq!(parsed, section);
    }

    #[test]
    fn empty_proof_section_is_two_bytes() {
        let bytes = ProofSection::default().pkt_serialize_to_vec().unwrap();
        assert_eq!(bytes, [0x00, 0x00]);
    }

    #[test]
    fn terminator_with_payload_is_rejected() {
        // kind 0, length 3
        let bytes: &[u8] = &[0x00, 0x03, 0xaa, 0xbb, 0xcc];
        assert!(matches!(
            bytes.pkt_deserialize_into::<ProofSection>(),
            Err(SerializationError::Parse(
                "proof section terminator has a payload"
            ))
        ));
    }

    #[test]
    fn unterminated_section_is_truncated() {
        // a single complete entity, then end of input instead of a terminator
        let bytes: &[u8] = &[0x01, 0x02, 0xaa, 0xbb];
        assert!(matches!(
            bytes.pkt_deserialize_into::<ProofSection>(),
            Err(SerializationError::Truncated {
                field: "proof entity kind",
                ..
            })
        ));
    }
}
