use std::io;

use byteorder::{LittleEndian, ReadBytesExt};

use super::{OrTruncatedExt, SerializationError};

/// Extends [`Read`] with methods for reading Bitcoin-style wire types.
///
/// [`Read`]: https://doc.rust-lang.org/std/io/trait.Read.html
pub trait ReadPktExt: io::Read {
    /// Reads a `u64` using the Bitcoin `CompactSize` encoding.
    ///
    /// Non-canonical encodings (a wider prefix than the value requires) are
    /// rejected, so every `u64` has exactly one accepted byte form.
    ///
    /// # Security
    ///
    /// Deserialized sizes must be validated before being used to allocate
    /// memory. Count-prefixed vectors are bounded by
    /// [`TrustedPreallocate`](super::TrustedPreallocate).
    ///
    /// # Examples
    ///
    /// ```
    /// use pkt_chain::serialization::ReadPktExt;
    ///
    /// use std::io::Cursor;
    /// assert_eq!(
    ///     0x12,
    ///     Cursor::new(b"\x12")
    ///         .read_compactsize().unwrap()
    /// );
    /// assert_eq!(
    ///     0xfd,
    ///     Cursor::new(b"\xfd\xfd\x00")
    ///         .read_compactsize().unwrap()
    /// );
    /// assert_eq!(
    ///     0xaafd,
    ///     Cursor::new(b"\xfd\xfd\xaa")
    ///         .read_compactsize().unwrap()
    /// );
    /// ```
    #[inline]
    fn read_compactsize(&mut self) -> Result<u64, SerializationError> {
        use SerializationError::Parse;
        let flag_byte = self.read_u8().or_truncated("compactsize")?;
        match flag_byte {
            n @ 0x00..=0xfc => Ok(n as u64),
            0xfd => match self.read_u16::<LittleEndian>().or_truncated("compactsize")? {
                n @ 0x0000_00fd..=0x0000_ffff => Ok(n as u64),
                _ => Err(Parse("non-canonical compactsize")),
            },
            0xfe => match self.read_u32::<LittleEndian>().or_truncated("compactsize")? {
                n @ 0x0001_0000..=0xffff_ffff => Ok(n as u64),
                _ => Err(Parse("non-canonical compactsize")),
            },
            0xff => match self.read_u64::<LittleEndian>().or_truncated("compactsize")? {
                n @ 0x1_0000_0000..=0xffff_ffff_ffff_ffff => Ok(n),
                _ => Err(Parse("non-canonical compactsize")),
            },
        }
    }

    /// Convenience method to read a `[u8; 4]`.
    #[inline]
    fn read_4_bytes(&mut self) -> io::Result<[u8; 4]> {
        let mut bytes = [0; 4];
        self.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    /// Convenience method to read a `[u8; 32]`.
    #[inline]
    fn read_32_bytes(&mut self) -> io::Result<[u8; 32]> {
        let mut bytes = [0; 32];
        self.read_exact(&mut bytes)?;
        Ok(bytes)
    }
}

/// Mark all types implementing `Read` as implementing the extension.
impl<R: io::Read + ?Sized> ReadPktExt for R {}

/// An [`io::Read`] adapter that counts the bytes consumed from the inner
/// reader, so decode errors can report the offset at which input ran out.
pub struct TrackedReader<R> {
    inner: R,
    position: u64,
}

impl<R: io::Read> TrackedReader<R> {
    /// Wrap `inner`, with the byte count starting at zero.
    pub fn new(inner: R) -> Self {
        TrackedReader { inner, position: 0 }
    }

    /// The number of bytes consumed from the inner reader so far.
    pub fn position(&self) -> u64 {
        self.position
    }
}

impl<R: io::Read> io::Read for TrackedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.position += n as u64;
        Ok(n)
    }
}
