//! Trait for converting hashes to their display byte representation.

/// Accesses and constructs 32-byte hash types from their internal serialized
/// (wire, little-endian) byte order and their big-endian display order.
///
/// Hashes are serialized little-endian on the wire but conventionally
/// printed and compared big-endian, following the u256 convention set by
/// Bitcoin. Expected hash constants are given in display order.
pub trait BytesInDisplayOrder: Sized {
    /// Returns the bytes in the internal serialized order.
    fn bytes_in_serialized_order(&self) -> [u8; 32];

    /// Creates an instance from bytes in the internal serialized order.
    fn from_bytes_in_serialized_order(bytes: [u8; 32]) -> Self;

    /// Return the bytes in big-endian byte-order suitable for printing out
    /// byte by byte.
    fn bytes_in_display_order(&self) -> [u8; 32] {
        let mut reversed_bytes = self.bytes_in_serialized_order();
        reversed_bytes.reverse();
        reversed_bytes
    }

    /// Convert bytes in big-endian display order into an instance.
    fn from_bytes_in_display_order(bytes_in_display_order: &[u8; 32]) -> Self {
        let mut internal_byte_order = *bytes_in_display_order;
        internal_byte_order.reverse();
        Self::from_bytes_in_serialized_order(internal_byte_order)
    }
}
