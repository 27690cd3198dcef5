//! Metric helpers for `binaryio`.
//!
//! This module defines metric names and simple helper functions wrapping the
//! [`metrics`](https://docs.rs/metrics) crate. With the `metrics` feature
//! disabled the helpers compile to no-ops.

#[cfg(feature = "metrics")]
use metrics::counter;

/// Name of the counter tracking bytes consumed by successful reads.
pub const BYTES_READ: &str = "binaryio_bytes_read_total";
/// Name of the counter tracking short reads.
pub const SHORT_READS: &str = "binaryio_short_reads_total";
/// Name of the counter tracking errors reported by byte sources.
pub const SOURCE_ERRORS: &str = "binaryio_source_errors_total";

/// Read operation that can report a short read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Single byte read.
    Byte,
    /// Raw byte run read.
    Bytes,
    /// Forward skip.
    Skip,
}

impl Operation {
    /// Label value used for this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Byte => "byte",
            Operation::Bytes => "bytes",
            Operation::Skip => "skip",
        }
    }
}

/// Record `count` bytes consumed by a successful read.
pub fn add_bytes_read(
    #[cfg_attr(not(feature = "metrics"), expect(unused_variables))] count: usize,
) {
    #[cfg(feature = "metrics")]
    counter!(BYTES_READ).increment(count as u64);
}

/// Record a short read for the given operation.
pub fn inc_short_reads(
    #[cfg_attr(not(feature = "metrics"), expect(unused_variables))] operation: Operation,
) {
    #[cfg(feature = "metrics")]
    counter!(SHORT_READS, "operation" => operation.as_str()).increment(1);
}

/// Record an error reported by the byte source.
pub fn inc_source_errors() {
    #[cfg(feature = "metrics")]
    counter!(SOURCE_ERRORS).increment(1);
}
