#![doc(html_root_url = "https://docs.rs/binaryio/latest")]
//! Byte-order aware readers for fixed-width binary data.
//!
//! [`ByteOrderReader`] decodes integers, raw byte runs and skips from any
//! [`std::io::Read`] source in a byte order fixed at construction.
//! [`BufferedByteOrderReader`] does the same over an in-memory buffer and can
//! report how many bytes remain. Both implement [`BinaryRead`].
//!
//! ```
//! use binaryio::{BinaryRead, BufferedByteOrderReader};
//!
//! let mut reader = BufferedByteOrderReader::big_endian(vec![0x00u8, 0x01, 0x00, 0x02]);
//! assert_eq!(reader.read_u16s(2).unwrap(), vec![1, 2]);
//! assert!(reader.is_empty());
//! ```

pub mod buffered;
pub mod byte_order;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod reader;

pub use buffered::BufferedByteOrderReader;
pub use byte_order::{ByteOrder, Primitive};
pub use error::{ReadError, Result};
pub use layout::{Field, IntKind, Layout, LayoutError, Value};
pub use reader::{BinaryRead, ByteOrderReader};
