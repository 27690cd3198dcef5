//! Textual record layouts decoded field by field.
//!
//! A layout is a comma-separated list of fields:
//!
//! - `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64`, `i64`: one integer
//! - `u16[4]`: an array of four integers of the given kind
//! - `bytes:N`: a raw run of `N` bytes
//! - `skip:N`: discard `N` bytes
//!
//! A scalar `u8` is read as a single byte and fails with a short read at end
//! of input, while `u8[N]` is an integer array and reports the source's end of
//! stream error instead.
//!
//! ```
//! use binaryio::{BufferedByteOrderReader, Layout};
//!
//! let layout: Layout = "u16, skip:1, u8[2]".parse().unwrap();
//! let mut reader = BufferedByteOrderReader::big_endian(vec![0x00u8, 0x07, 0xFF, 1, 2]);
//! let values = layout.decode(&mut reader).unwrap();
//! assert_eq!(values[0].to_string(), "7");
//! assert_eq!(values[2].to_string(), "[1, 2]");
//! ```

use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

use crate::{error::Result, reader::BinaryRead};

/// Integer kinds a layout field can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntKind {
    /// Unsigned 8-bit.
    U8,
    /// Signed 8-bit.
    I8,
    /// Unsigned 16-bit.
    U16,
    /// Signed 16-bit.
    I16,
    /// Unsigned 32-bit.
    U32,
    /// Signed 32-bit.
    I32,
    /// Unsigned 64-bit.
    U64,
    /// Signed 64-bit.
    I64,
}

impl IntKind {
    const ALL: [IntKind; 8] = [
        IntKind::U8,
        IntKind::I8,
        IntKind::U16,
        IntKind::I16,
        IntKind::U32,
        IntKind::I32,
        IntKind::U64,
        IntKind::I64,
    ];

    /// Layout name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IntKind::U8 => "u8",
            IntKind::I8 => "i8",
            IntKind::U16 => "u16",
            IntKind::I16 => "i16",
            IntKind::U32 => "u32",
            IntKind::I32 => "i32",
            IntKind::U64 => "u64",
            IntKind::I64 => "i64",
        }
    }

    fn from_name(name: &str) -> Option<Self> { Self::ALL.into_iter().find(|k| k.as_str() == name) }

    fn read_one<B: BinaryRead + ?Sized>(self, reader: &mut B) -> Result<Value> {
        Ok(match self {
            IntKind::U8 => Value::Unsigned(u64::from(reader.read_byte()?)),
            IntKind::I8 => Value::Signed(i64::from(reader.read_value::<i8>()?)),
            IntKind::U16 => Value::Unsigned(u64::from(reader.read_u16()?)),
            IntKind::I16 => Value::Signed(i64::from(reader.read_i16()?)),
            IntKind::U32 => Value::Unsigned(u64::from(reader.read_u32()?)),
            IntKind::I32 => Value::Signed(i64::from(reader.read_i32()?)),
            IntKind::U64 => Value::Unsigned(reader.read_u64()?),
            IntKind::I64 => Value::Signed(reader.read_i64()?),
        })
    }

    fn read_many<B: BinaryRead + ?Sized>(self, reader: &mut B, count: usize) -> Result<Value> {
        fn widen<T, U: From<T>>(values: Vec<T>) -> Vec<U> {
            values.into_iter().map(U::from).collect()
        }

        Ok(match self {
            IntKind::U8 => Value::UnsignedArray(widen(reader.read_values::<u8>(count)?)),
            IntKind::I8 => Value::SignedArray(widen(reader.read_values::<i8>(count)?)),
            IntKind::U16 => Value::UnsignedArray(widen(reader.read_u16s(count)?)),
            IntKind::I16 => Value::SignedArray(widen(reader.read_i16s(count)?)),
            IntKind::U32 => Value::UnsignedArray(widen(reader.read_u32s(count)?)),
            IntKind::I32 => Value::SignedArray(widen(reader.read_i32s(count)?)),
            IntKind::U64 => Value::UnsignedArray(reader.read_u64s(count)?),
            IntKind::I64 => Value::SignedArray(reader.read_i64s(count)?),
        })
    }
}

/// One entry of a [`Layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// A single integer.
    Scalar(IntKind),
    /// `count` consecutive integers.
    Array(IntKind, usize),
    /// A raw run of bytes.
    Bytes(usize),
    /// Bytes to discard.
    Skip(usize),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Scalar(kind) => f.write_str(kind.as_str()),
            Field::Array(kind, count) => write!(f, "{}[{count}]", kind.as_str()),
            Field::Bytes(count) => write!(f, "bytes:{count}"),
            Field::Skip(count) => write!(f, "skip:{count}"),
        }
    }
}

impl FromStr for Field {
    type Err = LayoutError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let text = s.trim();
        let count = |raw: &str| {
            raw.trim().parse::<usize>().map_err(|source| LayoutError::InvalidCount {
                field: text.to_owned(),
                source,
            })
        };

        if let Some(raw) = text.strip_prefix("bytes:") {
            return Ok(Field::Bytes(count(raw)?));
        }
        if let Some(raw) = text.strip_prefix("skip:") {
            return Ok(Field::Skip(count(raw)?));
        }
        if let Some((name, rest)) = text.split_once('[') {
            let raw = rest
                .strip_suffix(']')
                .ok_or_else(|| LayoutError::UnknownField(text.to_owned()))?;
            let kind = IntKind::from_name(name.trim())
                .ok_or_else(|| LayoutError::UnknownField(text.to_owned()))?;
            return Ok(Field::Array(kind, count(raw)?));
        }
        IntKind::from_name(text)
            .map(Field::Scalar)
            .ok_or_else(|| LayoutError::UnknownField(text.to_owned()))
    }
}

/// Errors raised while parsing a layout string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout contained no fields.
    #[error("layout is empty")]
    Empty,
    /// A field name was not recognised.
    #[error("unknown layout field: {0:?}")]
    UnknownField(String),
    /// A field count was not a non-negative integer.
    #[error("invalid count in layout field {field:?}: {source}")]
    InvalidCount {
        /// Field text as written.
        field: String,
        /// Parse failure for the count.
        source: ParseIntError,
    },
}

/// Value produced by decoding one [`Field`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// An unsigned integer, widened to 64 bits.
    Unsigned(u64),
    /// A signed integer, widened to 64 bits.
    Signed(i64),
    /// Unsigned integers, widened to 64 bits.
    UnsignedArray(Vec<u64>),
    /// Signed integers, widened to 64 bits.
    SignedArray(Vec<i64>),
    /// A raw byte run.
    Bytes(Vec<u8>),
    /// Number of bytes discarded.
    Skipped(usize),
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unsigned(v) => write!(f, "{v}"),
            Value::Signed(v) => write!(f, "{v}"),
            Value::UnsignedArray(values) => write_list(f, values),
            Value::SignedArray(values) => write_list(f, values),
            Value::Bytes(bytes) => bytes.iter().try_for_each(|b| write!(f, "{b:02x}")),
            Value::Skipped(count) => write!(f, "skipped {count}"),
        }
    }
}

/// Ordered list of fields describing a fixed record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    fields: Vec<Field>,
}

impl Layout {
    /// Build a layout from already parsed fields.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Empty`] if `fields` is empty.
    pub fn new(fields: Vec<Field>) -> std::result::Result<Self, LayoutError> {
        if fields.is_empty() {
            return Err(LayoutError::Empty);
        }
        Ok(Self { fields })
    }

    /// Fields in decode order.
    #[must_use]
    pub fn fields(&self) -> &[Field] { &self.fields }

    /// Decode every field from `reader` in order.
    ///
    /// # Errors
    ///
    /// Returns the first read error encountered; values decoded before it are
    /// discarded.
    pub fn decode<B: BinaryRead + ?Sized>(&self, reader: &mut B) -> Result<Vec<Value>> {
        self.fields
            .iter()
            .map(|field| match *field {
                Field::Scalar(kind) => kind.read_one(reader),
                Field::Array(kind, count) => kind.read_many(reader, count),
                Field::Bytes(count) => reader.read_bytes(count).map(Value::Bytes),
                Field::Skip(count) => reader.skip(count).map(|()| Value::Skipped(count)),
            })
            .collect()
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(LayoutError::Empty);
        }
        let fields = s
            .split(',')
            .map(str::parse)
            .collect::<std::result::Result<Vec<Field>, _>>()?;
        Self::new(fields)
    }
}
