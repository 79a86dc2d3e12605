use std::{io, num::TryFromIntError};

use thiserror::Error;

/// A serialization error.
#[derive(Error, Debug)]
pub enum SerializationError {
    /// An io error that prevented deserialization
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The data to be deserialized was malformed.
    #[error("parse error: {0}")]
    Parse(&'static str),

    /// The byte stream ended before the named field could be fully read.
    ///
    /// `offset` is the byte offset into the stream at which input ran out.
    /// Decodes that start from the beginning of a buffer report absolute
    /// offsets; standalone sub-structure decodes report offsets relative to
    /// the start of that structure.
    #[error("unexpected end of input while reading {field} at byte offset {offset}")]
    Truncated {
        /// The wire field that was being read when input ran out.
        field: &'static str,
        /// The stream offset at which input ran out.
        offset: u64,
    },

    /// The length of a vec is too large to convert to a usize (and thus, too
    /// large to allocate on this platform)
    #[error("compactsize too large: {0}")]
    TryFromIntError(#[from] TryFromIntError),
}

impl SerializationError {
    /// Replace the field name of a [`SerializationError::Truncated`] error.
    ///
    /// Used by composite decoders to rename the generic "compactsize" field
    /// of a length or count read that ran out of input. Other variants are
    /// returned unchanged.
    pub(crate) fn with_field(self, field: &'static str) -> Self {
        match self {
            SerializationError::Truncated { offset, .. } => {
                SerializationError::Truncated { field, offset }
            }
            other => other,
        }
    }

    /// Set the stream offset of a [`SerializationError::Truncated`] error.
    ///
    /// Called at decode entry points that track the number of consumed bytes,
    /// overriding any offset a nested decoder recorded relative to its own
    /// start. Other variants are returned unchanged.
    pub(crate) fn at_offset(self, offset: u64) -> Self {
        match self {
            SerializationError::Truncated { field, .. } => {
                SerializationError::Truncated { field, offset }
            }
            other => other,
        }
    }
}

/// Maps end-of-input io errors to [`SerializationError::Truncated`], naming
/// the wire field being read.
pub(crate) trait OrTruncatedExt<T> {
    /// Convert an `UnexpectedEof` error into a `Truncated` error for `field`.
    fn or_truncated(self, field: &'static str) -> Result<T, SerializationError>;
}

impl<T> OrTruncatedExt<T> for io::Result<T> {
    fn or_truncated(self, field: &'static str) -> Result<T, SerializationError> {
        self.map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => SerializationError::Truncated { field, offset: 0 },
            _ => SerializationError::Io(e),
        })
    }
}
