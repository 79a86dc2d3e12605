//! Consensus-critical serialization.
//!
//! This module contains four traits: `PktSerialize` and `PktDeserialize`,
//! analogs of the Serde `Serialize` and `Deserialize` traits but intended for
//! consensus-critical wire formats, and `WritePktExt` and `ReadPktExt`,
//! extension traits for `io::Read` and `io::Write` with utility functions
//! for reading and writing data (e.g., the Bitcoin variable-integer format).

mod display_order;
mod error;
mod pkt_deserialize;
mod pkt_serialize;
mod read_pkt;
mod write_pkt;

pub mod sha256d;

#[cfg(test)]
mod tests;

pub use display_order::BytesInDisplayOrder;
pub use error::SerializationError;
pub use pkt_deserialize::{
    pkt_deserialize_bytes_external_count, pkt_deserialize_external_count, PktDeserialize,
    PktDeserializeInto, TrustedPreallocate,
};
pub use pkt_serialize::{
    pkt_serialize_bytes, pkt_serialize_bytes_external_count, pkt_serialize_external_count,
    PktSerialize, MAX_PROTOCOL_MESSAGE_LEN,
};
pub use read_pkt::{ReadPktExt, TrackedReader};
pub use write_pkt::WritePktExt;

pub(crate) use error::OrTruncatedExt;
