use std::{io::Cursor, sync::Arc};

use chrono::{TimeZone, Utc};

use crate::{
    amount::{Amount, COIN},
    serialization::{PktDeserialize, PktSerialize, SerializationError},
    transaction::{LockTime, Transaction},
    transparent,
    work::{
        difficulty::CompactDifficulty,
        proof::{ProofEntity, ProofSection},
    },
};

use super::{Block, BlockEncoding, Hash, Header, BLOCK_HEADER_LENGTH};

fn block_with_proof(proof: Option<ProofSection>) -> Block {
    let coinbase = Transaction {
        version: 1,
        inputs: vec![transparent::Input {
            outpoint: transparent::OutPoint::null(),
            unlock_script: transparent::Script::new(b"\x51"),
            sequence: u32::MAX,
        }],
        outputs: vec![transparent::Output {
            value: Amount::from(50 * COIN),
            lock_script: transparent::Script::new(b"\x51"),
        }],
        lock_time: LockTime::unlocked(),
    };

    let transactions = vec![Arc::new(coinbase)];
    let merkle_root = transactions.iter().collect();

    Block {
        header: Header {
            version: 1,
            previous_block_hash: Hash([0; 32]),
            merkle_root,
            time: Utc.timestamp_opt(1_231_006_505, 0).unwrap(),
            difficulty_threshold: CompactDifficulty::from(0x1d00ffff),
            nonce: 42,
        },
        proof,
        transactions,
    }
}

#[test]
fn serialized_header_is_80_bytes() {
    let block = block_with_proof(None);

    let bytes = block.header.pkt_serialize_to_vec().unwrap();

    assert_eq!(bytes.len(), BLOCK_HEADER_LENGTH);
}

#[test]
fn base_encoding_roundtrip() {
    let block = block_with_proof(None);

    let bytes = block.pkt_serialize_to_vec().unwrap();
    let parsed = Block::pkt_deserialize(Cursor::new(&bytes)).unwrap();

    assert_eq!(block, parsed);
    assert_eq!(block.hash(), parsed.hash());
}

#[test]
fn extended_encoding_roundtrip() {
    let block = block_with_proof(Some(ProofSection {
        entities: vec![ProofEntity {
            kind: 1,
            payload: vec![0xab; 64],
        }],
    }));

    let bytes = block.pkt_serialize_to_vec().unwrap();
    let parsed = Block::pkt_deserialize_with(Cursor::new(&bytes), BlockEncoding::PacketCrypt).unwrap();

    assert_eq!(block, parsed);

    let reencoded = parsed.pkt_serialize_to_vec().unwrap();
    assert_eq!(bytes, reencoded);
}

#[test]
fn proof_section_is_not_part_of_the_hash() {
    let base = block_with_proof(None);
    let extended = block_with_proof(Some(ProofSection::default()));

    assert_eq!(base.hash(), extended.hash());
}

#[test]
fn truncated_base_block_reports_offset() {
    let bytes = block_with_proof(None).pkt_serialize_to_vec().unwrap();

    for len in 0..bytes.len() {
        match Block::pkt_deserialize(&bytes[..len]) {
            Err(SerializationError::Truncated { offset, .. }) => {
                assert_eq!(offset, len as u64, "offset should be the input length");
            }
            other => panic!("expected a truncation error for length {len}, got {other:?}"),
        }
    }
}

#[test]
fn truncated_extended_block_reports_offset() {
    let block = block_with_proof(Some(ProofSection {
        entities: vec![ProofEntity {
            kind: 1,
            payload: vec![0xcd; 16],
        }],
    }));
    let bytes = block.pkt_serialize_to_vec().unwrap();

    for len in 0..bytes.len() {
        match Block::pkt_deserialize_with(&bytes[..len], BlockEncoding::PacketCrypt) {
            Err(SerializationError::Truncated { offset, .. }) => {
                assert_eq!(offset, len as u64, "offset should be the input length");
            }
            other => panic!("expected a truncation error for length {len}, got {other:?}"),
        }
    }
}

#[test]
fn blocks_are_serde_serializable() {
    fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}

    // `transactions` is a `Vec<Arc<Transaction>>`, so this needs serde's
    // shared-pointer impls.
    assert_serde::<Block>();
}

#[test]
fn coinbase_transaction_is_found() {
    let block = block_with_proof(None);

    let coinbase = block.coinbase_transaction().expect("block has a coinbase");
    assert!(coinbase.is_coinbase());
}
