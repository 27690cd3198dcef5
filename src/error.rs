//! Error and result types for byte-order readers.
//!
//! Two failure families are kept apart on purpose. [`ReadError::ShortRead`]
//! is raised by the single-byte, raw-byte and skip operations when one read
//! call delivers fewer bytes than requested. Every other failure of the byte
//! source, including end of stream on the integer paths, arrives unchanged as
//! [`ReadError::Io`].

use std::io;

use bincode::error::DecodeError;
use thiserror::Error;

/// Errors produced by [`BinaryRead`](crate::BinaryRead) implementations.
#[derive(Debug, Error)]
pub enum ReadError {
    /// A single read call returned fewer bytes than the operation required.
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Bytes the operation asked for.
        expected: usize,
        /// Bytes the source delivered.
        actual: usize,
    },

    /// The byte source reported an error, propagated verbatim.
    #[error("byte source error: {0}")]
    Io(#[from] io::Error),

    /// A caller-defined fixed layout could not be decoded.
    #[error("fixed-layout decode failed: {0}")]
    Decode(#[from] DecodeError),
}

impl ReadError {
    /// Returns true if this error is a [`ReadError::ShortRead`].
    #[must_use]
    pub fn is_short_read(&self) -> bool { matches!(self, Self::ShortRead { .. }) }

    /// Returns the underlying I/O error kind, if the source reported one.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io(error) => Some(error.kind()),
            Self::ShortRead { .. } | Self::Decode(_) => None,
        }
    }
}

/// Result alias used by the reader APIs.
pub type Result<T> = std::result::Result<T, ReadError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn short_read_message_names_both_counts() {
        let err = ReadError::ShortRead {
            expected: 4,
            actual: 1,
        };
        assert_eq!(err.to_string(), "short read: expected 4 bytes, got 1");
        assert!(err.is_short_read());
        assert!(err.source().is_none());
    }

    #[test]
    fn io_errors_keep_their_kind_and_source() {
        let err = ReadError::from(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(!err.is_short_read());
        assert_eq!(err.io_kind(), Some(io::ErrorKind::UnexpectedEof));
        assert!(err.source().is_some());
    }
}
