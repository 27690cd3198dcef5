//! Byte sources with controlled delivery.

use std::io::{self, Read};

/// Source that delivers at most `chunk` bytes per `read` call.
///
/// Models a network stream that hands data over in small pieces.
#[derive(Debug)]
pub struct ChunkedReader<R> {
    inner: R,
    chunk: usize,
    calls: usize,
}

impl<R: Read> ChunkedReader<R> {
    /// Wrap `inner`, capping every read at `chunk` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `chunk` is zero.
    #[must_use]
    pub fn new(inner: R, chunk: usize) -> Self {
        assert!(chunk > 0, "chunk size must be non-zero");
        Self {
            inner,
            chunk,
            calls: 0,
        }
    }

    /// Number of `read` calls served so far.
    #[must_use]
    pub fn calls(&self) -> usize { self.calls }
}

impl<R: Read> Read for ChunkedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.calls += 1;
        let len = buf.len().min(self.chunk);
        self.inner.read(&mut buf[..len])
    }
}

/// Source whose every `read` fails with the same error kind.
#[derive(Clone, Copy, Debug)]
pub struct FailingReader {
    kind: io::ErrorKind,
}

impl FailingReader {
    /// Create a source failing with `kind`.
    #[must_use]
    pub fn new(kind: io::ErrorKind) -> Self { Self { kind } }
}

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(self.kind, "injected source failure"))
    }
}
