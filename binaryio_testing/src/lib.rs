//! Test doubles and fixtures for exercising `binaryio` readers.
//!
//! These helpers model byte sources that misbehave in controlled ways and
//! encode values in a chosen byte order for round-trip assertions.
//!
//! ```rust
//! use binaryio::{BinaryRead, ByteOrder, ByteOrderReader};
//! use binaryio_testing::{ChunkedReader, encode_values};
//!
//! let bytes = encode_values(ByteOrder::Little, &[1u32, 2]);
//! let mut reader = ByteOrderReader::little_endian(ChunkedReader::new(bytes.as_slice(), 3));
//! assert_eq!(reader.read_u32s(2).unwrap(), vec![1, 2]);
//! ```

pub mod logging;
pub mod sources;

use binaryio::{ByteOrder, Primitive};
pub use logging::{LoggerHandle, logger};
pub use sources::{ChunkedReader, FailingReader};

/// Encode `values` back to back in `order`.
#[must_use]
pub fn encode_values<T: Primitive>(order: ByteOrder, values: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * T::WIDTH);
    for value in values {
        value.write_order_bytes(order, &mut out);
    }
    out
}
