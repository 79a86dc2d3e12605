use std::io::Cursor;

use crate::{
    amount::{Amount, COIN},
    serialization::{PktDeserialize, PktSerialize, SerializationError},
    transparent,
};

use super::{LockTime, Transaction};

/// The coinbase transaction embedded in the original Bitcoin genesis block,
/// reused by several of the networks this crate describes.
fn genesis_coinbase() -> Transaction {
    let unlock_script = hex::decode(
        "04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73",
    )
    .expect("valid hex");
    let lock_script = hex::decode(
        "4104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac",
    )
    .expect("valid hex");

    Transaction {
        version: 1,
        inputs: vec![transparent::Input {
            outpoint: transparent::OutPoint::null(),
            unlock_script: transparent::Script::new(&unlock_script),
            sequence: u32::MAX,
        }],
        outputs: vec![transparent::Output {
            value: Amount::from(50 * COIN),
            lock_script: transparent::Script::new(&lock_script),
        }],
        lock_time: LockTime::unlocked(),
    }
}

#[test]
fn genesis_coinbase_hash_matches_known_value() {
    let transaction = genesis_coinbase();

    assert!(transaction.is_coinbase());
    assert_eq!(
        transaction.hash().to_string(),
        "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"
    );
}

#[test]
fn genesis_coinbase_roundtrip() {
    let transaction = genesis_coinbase();

    let bytes = transaction
        .pkt_serialize_to_vec()
        .expect("serialization into a vec never fails");
    let parsed = Transaction::pkt_deserialize(Cursor::new(&bytes))
        .expect("genesis coinbase deserializes");

    assert_eq!(transaction, parsed);
}

#[test]
fn truncated_transaction_reports_offset() {
    let bytes = genesis_coinbase()
        .pkt_serialize_to_vec()
        .expect("serialization into a vec never fails");

    for len in 0..bytes.len() {
        match Transaction::pkt_deserialize(&bytes[..len]) {
            Err(SerializationError::Truncated { offset, .. }) => {
                assert_eq!(offset, len as u64, "offset should be the input length");
            }
            other => panic!("expected a truncation error for length {len}, got {other:?}"),
        }
    }
}

#[test]
fn oversized_input_count_is_rejected_before_allocating() {
    use crate::serialization::{TrustedPreallocate, WritePktExt};

    // version 1, then an input count just past the preallocation bound
    let mut bytes = vec![0x01, 0x00, 0x00, 0x00];
    bytes
        .write_compactsize(transparent::Input::max_allocation() + 1)
        .expect("writing into a vec never fails");

    // The count alone would demand gigabytes, so the guard must fire on the
    // declared count, not on running out of input bytes.
    assert!(matches!(
        Transaction::pkt_deserialize(bytes.as_slice()),
        Err(SerializationError::Parse("Vector longer than max_allocation"))
    ));
}

#[test]
fn hash_parses_and_displays_in_big_endian_order() {
    use super::Hash;

    let hash: Hash = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"
        .parse()
        .expect("valid hex");

    // Serialized order is the reverse of display order.
    assert_eq!(hash.0[0], 0x3b);
    assert_eq!(
        hash.to_string(),
        "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"
    );
}
