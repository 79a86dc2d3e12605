//! Tests for consensus-critical serialization primitives.

use std::io::Cursor;

use proptest::prelude::*;

use super::{sha256d, ReadPktExt, SerializationError, WritePktExt};

/// The wire length a compactsize value must occupy, selected by its prefix.
fn compactsize_len(n: u64) -> usize {
    match n {
        0x0000_0000..=0x0000_00fc => 1,
        0x0000_00fd..=0x0000_ffff => 3,
        0x0001_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

#[test]
fn compactsize_known_encodings() {
    let cases: [(u64, &[u8]); 8] = [
        (0x00, b"\x00"),
        (0xfc, b"\xfc"),
        (0xfd, b"\xfd\xfd\x00"),
        (0xffff, b"\xfd\xff\xff"),
        (0x1_0000, b"\xfe\x00\x00\x01\x00"),
        (0xffff_ffff, b"\xfe\xff\xff\xff\xff"),
        (0x1_0000_0000, b"\xff\x00\x00\x00\x00\x01\x00\x00\x00"),
        (u64::MAX, b"\xff\xff\xff\xff\xff\xff\xff\xff\xff"),
    ];

    for (n, bytes) in cases {
        let mut buf = Vec::new();
        buf.write_compactsize(n).unwrap();
        assert_eq!(buf, bytes, "encoding of {n:#x}");
        assert_eq!(Cursor::new(bytes).read_compactsize().unwrap(), n);
    }
}

#[test]
fn compactsize_rejects_non_canonical() {
    // Each value here fits in a narrower prefix than the one used.
    for bytes in [
        &b"\xfd\xfc\x00"[..],
        &b"\xfe\xff\xff\x00\x00"[..],
        &b"\xff\xff\xff\xff\xff\x00\x00\x00\x00"[..],
    ] {
        assert!(matches!(
            Cursor::new(bytes).read_compactsize(),
            Err(SerializationError::Parse("non-canonical compactsize"))
        ));
    }
}

#[test]
fn compactsize_truncated_extension() {
    for bytes in [&b"\xfd"[..], &b"\xfd\xaa"[..], &b"\xfe\xaa\xbb\xcc"[..], &b"\xff"[..]] {
        assert!(matches!(
            Cursor::new(bytes).read_compactsize(),
            Err(SerializationError::Truncated {
                field: "compactsize",
                ..
            })
        ));
    }
}

#[test]
fn oversized_byte_length_is_rejected_before_allocating() {
    use super::{pkt_deserialize::MAX_U8_ALLOCATION, PktDeserialize};

    let mut bytes = Vec::new();
    bytes
        .write_compactsize(MAX_U8_ALLOCATION as u64 + 1)
        .unwrap();

    assert!(matches!(
        Vec::<u8>::pkt_deserialize(bytes.as_slice()),
        Err(SerializationError::Parse(
            "Byte vector longer than MAX_U8_ALLOCATION"
        ))
    ));
}

#[test]
fn sha256d_empty_input() {
    assert_eq!(
        hex::encode(sha256d::sha256d(b"")),
        "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
    );
}

#[test]
fn sha256d_writer_matches_one_shot() {
    use std::io::Write;

    assert_eq!(
        hex::encode(sha256d::sha256d(b"hello")),
        "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
    );

    let mut writer = sha256d::Writer::default();
    writer.write_all(b"he").unwrap();
    writer.write_all(b"llo").unwrap();
    assert_eq!(writer.finish(), sha256d::sha256d(b"hello"));
}

proptest! {
    /// Encoding then decoding any `u64` yields the original value, using
    /// exactly the prefix-selected byte width.
    #[test]
    fn compactsize_roundtrip(n in any::<u64>()) {
        let mut buf = Vec::new();
        buf.write_compactsize(n).unwrap();
        prop_assert_eq!(buf.len(), compactsize_len(n));

        let mut cursor = Cursor::new(&buf);
        prop_assert_eq!(cursor.read_compactsize().unwrap(), n);
        prop_assert_eq!(cursor.position() as usize, buf.len());
    }

    /// Any byte string that decodes as a compactsize re-encodes to the
    /// consumed prefix, so the encoding is a bijection.
    #[test]
    fn compactsize_decode_then_encode(bytes in proptest::collection::vec(any::<u8>(), 1..12)) {
        let mut cursor = Cursor::new(&bytes);
        if let Ok(n) = cursor.read_compactsize() {
            let consumed = cursor.position() as usize;
            let mut reencoded = Vec::new();
            reencoded.write_compactsize(n).unwrap();
            prop_assert_eq!(&reencoded, &bytes[..consumed]);
        }
    }
}
