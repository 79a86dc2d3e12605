//! Bitcoin-style scripts.

use std::{fmt, io};

use serde::{Deserialize, Serialize};

use crate::serialization::{
    pkt_deserialize_bytes_external_count, pkt_serialize_bytes, PktDeserialize, PktSerialize,
    ReadPktExt, SerializationError,
};

/// An encoding of a transaction script.
///
/// Script semantics are out of scope for this crate; scripts are carried as
/// raw bytes and round-tripped without interpretation.
#[derive(Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub struct Script(Vec<u8>);

impl Script {
    /// Create a new script from its raw bytes.
    /// The raw bytes must not contain the length prefix.
    pub fn new(raw_bytes: &[u8]) -> Self {
        Script(raw_bytes.to_vec())
    }

    /// Return the raw bytes of the script without the length prefix.
    ///
    /// # Correctness
    ///
    /// These raw bytes do not have a length prefix.
    /// The wire format requires a length prefix; use `pkt_serialize`
    /// and `pkt_deserialize` to create byte data with a length prefix.
    pub fn as_raw_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Script")
            .field(&hex::encode(&self.0))
            .finish()
    }
}

impl PktSerialize for Script {
    fn pkt_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error> {
        pkt_serialize_bytes(&self.0, writer)
    }
}

impl PktDeserialize for Script {
    fn pkt_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let len = reader
            .read_compactsize()
            .map_err(|e| e.with_field("script length"))?;
        let bytes = pkt_deserialize_bytes_external_count(len.try_into()?, reader)
            .map_err(|e| e.with_field("script bytes"))?;
        Ok(Script(bytes))
    }
}

#[cfg(test)]
mod proptests {
    use std::io::Cursor;

    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn script_roundtrip(script in any::<Script>()) {
            let mut bytes = Cursor::new(Vec::new());
            script.pkt_serialize(&mut bytes)?;

            bytes.set_position(0);
            let other_script = Script::pkt_deserialize(&mut bytes)?;

            prop_assert_eq![script, other_script];
        }
    }
}
