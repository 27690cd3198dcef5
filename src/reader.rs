//! Byte-order aware reader over any [`Read`] source.
//!
//! [`BinaryRead`] is the read contract shared by [`ByteOrderReader`] and
//! [`BufferedByteOrderReader`](crate::BufferedByteOrderReader). Each
//! operation is a single decode attempt at the source's current position;
//! nothing is retried.

use std::io::{self, Read};

use bincode::{Decode, config, error::DecodeError};
use tracing::{debug, trace};

use crate::{
    byte_order::{ByteOrder, Primitive},
    error::{ReadError, Result},
    metrics::{self, Operation},
};

/// Operations for decoding fixed-width values in a configured byte order.
///
/// The byte, raw-run and skip operations issue exactly one `read` call and
/// report [`ReadError::ShortRead`] when it delivers fewer bytes than asked.
/// The integer operations fill their buffer through [`Read::read_exact`] and
/// surface the source's own error, typically
/// [`io::ErrorKind::UnexpectedEof`], as [`ReadError::Io`].
///
/// After any error the source position is unspecified.
///
/// # Object Safety
///
/// This trait is not object-safe because of its generic methods. Use the
/// concrete reader types, or a generic bound, in APIs.
pub trait BinaryRead {
    /// Byte order used to reassemble multi-byte values.
    fn byte_order(&self) -> ByteOrder;

    /// Read a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::ShortRead`] if the source yields no byte, or
    /// [`ReadError::Io`] if the source fails.
    fn read_byte(&mut self) -> Result<u8>;

    /// Read exactly `expected` raw bytes with one call to the source.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::ShortRead`] if the call delivers fewer than
    /// `expected` bytes, or [`ReadError::Io`] if the source fails. A run too
    /// large to allocate fails with [`io::ErrorKind::OutOfMemory`] before the
    /// source is called.
    fn read_bytes(&mut self, expected: usize) -> Result<Vec<u8>>;

    /// Discard `count` bytes with one call to the source.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::ShortRead`] if fewer than `count` bytes were
    /// available, or [`ReadError::Io`] if the source fails. A count too large
    /// to allocate fails with [`io::ErrorKind::OutOfMemory`].
    fn skip(&mut self, count: usize) -> Result<()>;

    /// Read one fixed-width integer.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Io`] with the source's error if the value could not
    /// be filled.
    fn read_value<T: Primitive>(&mut self) -> Result<T>;

    /// Read `expected` consecutive fixed-width integers.
    ///
    /// An `expected` of zero returns an empty vector without touching the
    /// source.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Io`] with the source's error if the values could
    /// not be filled, with [`io::ErrorKind::InvalidInput`] if the byte count
    /// overflows `usize`, or with [`io::ErrorKind::OutOfMemory`] if the run
    /// cannot be allocated. Neither size error touches the source.
    fn read_values<T: Primitive>(&mut self, expected: usize) -> Result<Vec<T>>;

    /// Decode a caller-defined fixed layout using bincode's fixed-int encoding
    /// in this reader's byte order.
    ///
    /// ```
    /// use binaryio::{BinaryRead, BufferedByteOrderReader};
    ///
    /// #[derive(bincode::Decode, Debug, PartialEq)]
    /// struct Header {
    ///     magic: u16,
    ///     version: u8,
    /// }
    ///
    /// let mut reader = BufferedByteOrderReader::big_endian(vec![0xCAu8, 0xFE, 0x02]);
    /// let header: Header = reader.read_fixed().unwrap();
    /// assert_eq!(header, Header { magic: 0xCAFE, version: 2 });
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Decode`] with whatever bincode reports. Source
    /// failures, including end of stream, arrive as
    /// [`DecodeError::Io`](bincode::error::DecodeError::Io).
    fn read_fixed<T: Decode<()>>(&mut self) -> Result<T>;

    /// Read a `u16`.
    ///
    /// # Errors
    ///
    /// See [`BinaryRead::read_value`].
    fn read_u16(&mut self) -> Result<u16> { self.read_value() }

    /// Read an `i16`.
    ///
    /// # Errors
    ///
    /// See [`BinaryRead::read_value`].
    fn read_i16(&mut self) -> Result<i16> { self.read_value() }

    /// Read a `u32`.
    ///
    /// # Errors
    ///
    /// See [`BinaryRead::read_value`].
    fn read_u32(&mut self) -> Result<u32> { self.read_value() }

    /// Read an `i32`.
    ///
    /// # Errors
    ///
    /// See [`BinaryRead::read_value`].
    fn read_i32(&mut self) -> Result<i32> { self.read_value() }

    /// Read a `u64`.
    ///
    /// # Errors
    ///
    /// See [`BinaryRead::read_value`].
    fn read_u64(&mut self) -> Result<u64> { self.read_value() }

    /// Read an `i64`.
    ///
    /// # Errors
    ///
    /// See [`BinaryRead::read_value`].
    fn read_i64(&mut self) -> Result<i64> { self.read_value() }

    /// Read `expected` `u16` values.
    ///
    /// # Errors
    ///
    /// See [`BinaryRead::read_values`].
    fn read_u16s(&mut self, expected: usize) -> Result<Vec<u16>> { self.read_values(expected) }

    /// Read `expected` `i16` values.
    ///
    /// # Errors
    ///
    /// See [`BinaryRead::read_values`].
    fn read_i16s(&mut self, expected: usize) -> Result<Vec<i16>> { self.read_values(expected) }

    /// Read `expected` `u32` values.
    ///
    /// # Errors
    ///
    /// See [`BinaryRead::read_values`].
    fn read_u32s(&mut self, expected: usize) -> Result<Vec<u32>> { self.read_values(expected) }

    /// Read `expected` `i32` values.
    ///
    /// # Errors
    ///
    /// See [`BinaryRead::read_values`].
    fn read_i32s(&mut self, expected: usize) -> Result<Vec<i32>> { self.read_values(expected) }

    /// Read `expected` `u64` values.
    ///
    /// # Errors
    ///
    /// See [`BinaryRead::read_values`].
    fn read_u64s(&mut self, expected: usize) -> Result<Vec<u64>> { self.read_values(expected) }

    /// Read `expected` `i64` values.
    ///
    /// # Errors
    ///
    /// See [`BinaryRead::read_values`].
    fn read_i64s(&mut self, expected: usize) -> Result<Vec<i64>> { self.read_values(expected) }
}

/// Allocate a zeroed run of `len` bytes, failing instead of aborting when the
/// allocator cannot satisfy it.
fn zeroed(len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|error| {
        debug!(len, %error, "read buffer allocation failed");
        io::Error::new(io::ErrorKind::OutOfMemory, error)
    })?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Source adapter tallying the bytes handed to a decoder.
struct Counted<'a, R> {
    inner: &'a mut R,
    consumed: usize,
}

impl<R: Read> Read for Counted<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.consumed += n;
        Ok(n)
    }
}

/// Decodes fixed-width values from a [`Read`] source in a chosen byte order.
///
/// The reader owns no cursor of its own; position lives in the source. Pass
/// `&mut source` to keep ownership with the caller.
///
/// ```
/// use binaryio::{BinaryRead, ByteOrderReader};
///
/// let data: &[u8] = &[0x00, 0x01, 0x00, 0x02];
/// let mut reader = ByteOrderReader::little_endian(data);
/// assert_eq!(reader.read_u16().unwrap(), 256);
/// assert_eq!(reader.read_u16().unwrap(), 512);
/// ```
#[derive(Debug)]
pub struct ByteOrderReader<R> {
    source: R,
    order: ByteOrder,
}

impl<R: Read> ByteOrderReader<R> {
    /// Create a reader decoding `source` with the given byte order.
    #[must_use]
    pub const fn new(source: R, order: ByteOrder) -> Self { Self { source, order } }

    /// Create a big-endian reader over `source`.
    #[must_use]
    pub const fn big_endian(source: R) -> Self { Self::new(source, ByteOrder::Big) }

    /// Create a little-endian reader over `source`.
    #[must_use]
    pub const fn little_endian(source: R) -> Self { Self::new(source, ByteOrder::Little) }

    /// Borrow the underlying source.
    #[must_use]
    pub const fn get_ref(&self) -> &R { &self.source }

    /// Mutably borrow the underlying source.
    ///
    /// Reading from the source directly moves the position seen by this reader.
    pub fn get_mut(&mut self) -> &mut R { &mut self.source }

    /// Consume the reader, returning the source.
    #[must_use]
    pub fn into_inner(self) -> R { self.source }

    /// Issue one `read` call for `buf.len()` bytes, flagging a short read.
    fn read_once(&mut self, buf: &mut [u8], operation: Operation) -> Result<()> {
        let expected = buf.len();
        let actual = match self.source.read(buf) {
            Ok(n) => n,
            Err(error) => {
                debug!(operation = operation.as_str(), %error, "byte source failed");
                metrics::inc_source_errors();
                return Err(error.into());
            }
        };
        if actual != expected {
            debug!(
                operation = operation.as_str(),
                expected,
                actual,
                "short read"
            );
            metrics::inc_short_reads(operation);
            return Err(ReadError::ShortRead { expected, actual });
        }
        metrics::add_bytes_read(actual);
        Ok(())
    }

    /// Fill `buf` completely, propagating the source's error.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        if let Err(error) = self.source.read_exact(buf) {
            metrics::inc_source_errors();
            return Err(error.into());
        }
        trace!(len = buf.len(), order = self.order.as_str(), "decoded fixed-width run");
        metrics::add_bytes_read(buf.len());
        Ok(())
    }
}

impl<R: Read> BinaryRead for ByteOrderReader<R> {
    fn byte_order(&self) -> ByteOrder { self.order }

    fn read_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_once(&mut buf, Operation::Byte)?;
        Ok(buf[0])
    }

    fn read_bytes(&mut self, expected: usize) -> Result<Vec<u8>> {
        let mut buf = zeroed(expected)?;
        self.read_once(&mut buf, Operation::Bytes)?;
        Ok(buf)
    }

    fn skip(&mut self, count: usize) -> Result<()> {
        let mut scratch = zeroed(count)?;
        self.read_once(&mut scratch, Operation::Skip)
    }

    fn read_value<T: Primitive>(&mut self) -> Result<T> {
        let mut raw = [0u8; 8];
        let raw = &mut raw[..T::WIDTH];
        self.fill(raw)?;
        Ok(T::from_order_bytes(raw, self.order))
    }

    fn read_values<T: Primitive>(&mut self, expected: usize) -> Result<Vec<T>> {
        if expected == 0 {
            return Ok(Vec::new());
        }
        let len = expected.checked_mul(T::WIDTH).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "array length overflows usize")
        })?;
        let mut raw = zeroed(len)?;
        self.fill(&mut raw)?;
        Ok(raw
            .chunks_exact(T::WIDTH)
            .map(|chunk| T::from_order_bytes(chunk, self.order))
            .collect())
    }

    fn read_fixed<T: Decode<()>>(&mut self) -> Result<T> {
        let base = config::standard().with_fixed_int_encoding();
        let mut source = Counted {
            inner: &mut self.source,
            consumed: 0,
        };
        let value = match self.order {
            ByteOrder::Big => bincode::decode_from_std_read(&mut source, base.with_big_endian()),
            ByteOrder::Little => {
                bincode::decode_from_std_read(&mut source, base.with_little_endian())
            }
        };
        match value {
            Ok(value) => {
                trace!(
                    len = source.consumed,
                    order = self.order.as_str(),
                    "decoded fixed layout"
                );
                metrics::add_bytes_read(source.consumed);
                Ok(value)
            }
            Err(error) => {
                debug!(order = self.order.as_str(), %error, "fixed-layout decode failed");
                if matches!(error, DecodeError::Io { .. }) {
                    metrics::inc_source_errors();
                }
                Err(ReadError::Decode(error))
            }
        }
    }
}
