//! The SHA-256d hash function: two rounds of SHA-256, as used to derive
//! block and transaction identity hashes.

use std::io;

use sha2::{Digest, Sha256};

/// Computes the SHA-256d digest of `data`.
///
/// Total over any byte sequence, including the empty one. Note that the
/// returned bytes are in wire order; hashes are conventionally displayed
/// in the reverse byte order (see
/// [`BytesInDisplayOrder`](super::BytesInDisplayOrder)).
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// An [`io::Write`] adapter that accumulates a SHA-256d digest, for hashing
/// serialized forms without an intermediate buffer.
#[derive(Default)]
pub struct Writer {
    hash: Sha256,
}

impl Writer {
    /// Consume the Writer and produce the hash result.
    pub fn finish(self) -> [u8; 32] {
        let first = self.hash.finalize();
        Sha256::digest(first).into()
    }
}

impl io::Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.hash.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
