//! Reader over an in-memory buffer with a remaining-length query.
//!
//! `BufferedByteOrderReader` composes a [`ByteOrderReader`] whose source is a
//! [`bytes::buf::Reader`] over the caller's buffer. The remaining count is
//! read from that same buffer, so it always matches what the reads consumed.

use bincode::Decode;
use bytes::{Buf, Bytes, buf::Reader};

use crate::{
    byte_order::{ByteOrder, Primitive},
    error::Result,
    reader::{BinaryRead, ByteOrderReader},
};

/// Byte-order reader backed by an in-memory [`Bytes`] buffer.
///
/// ```
/// use binaryio::{BinaryRead, BufferedByteOrderReader};
///
/// let mut reader = BufferedByteOrderReader::big_endian(vec![0x00u8, 0x01, 0x00, 0x02]);
/// assert_eq!(reader.read_u16().unwrap(), 1);
/// assert_eq!(reader.remaining(), 2);
/// ```
#[derive(Debug)]
pub struct BufferedByteOrderReader {
    inner: ByteOrderReader<Reader<Bytes>>,
}

impl BufferedByteOrderReader {
    /// Create a reader over `buf` with the given byte order.
    #[must_use]
    pub fn new(buf: impl Into<Bytes>, order: ByteOrder) -> Self {
        Self {
            inner: ByteOrderReader::new(buf.into().reader(), order),
        }
    }

    /// Create a big-endian reader over `buf`.
    #[must_use]
    pub fn big_endian(buf: impl Into<Bytes>) -> Self { Self::new(buf, ByteOrder::Big) }

    /// Create a little-endian reader over `buf`.
    #[must_use]
    pub fn little_endian(buf: impl Into<Bytes>) -> Self { Self::new(buf, ByteOrder::Little) }

    /// Number of unread bytes left in the backing buffer.
    #[must_use]
    pub fn remaining(&self) -> usize { self.buffer().remaining() }

    /// Alias for [`remaining`](Self::remaining).
    #[must_use]
    pub fn len(&self) -> usize { self.remaining() }

    /// Returns true once every byte of the buffer has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool { !self.buffer().has_remaining() }

    /// Borrow the unread part of the backing buffer.
    #[must_use]
    pub fn buffer(&self) -> &Bytes { self.inner.get_ref().get_ref() }

    /// Consume the reader, returning the unread part of the buffer.
    #[must_use]
    pub fn into_inner(self) -> Bytes { self.inner.into_inner().into_inner() }
}

impl BinaryRead for BufferedByteOrderReader {
    fn byte_order(&self) -> ByteOrder { self.inner.byte_order() }

    fn read_byte(&mut self) -> Result<u8> { self.inner.read_byte() }

    fn read_bytes(&mut self, expected: usize) -> Result<Vec<u8>> { self.inner.read_bytes(expected) }

    fn skip(&mut self, count: usize) -> Result<()> { self.inner.skip(count) }

    fn read_value<T: Primitive>(&mut self) -> Result<T> { self.inner.read_value() }

    fn read_values<T: Primitive>(&mut self, expected: usize) -> Result<Vec<T>> {
        self.inner.read_values(expected)
    }

    fn read_fixed<T: Decode<()>>(&mut self) -> Result<T> { self.inner.read_fixed() }
}
