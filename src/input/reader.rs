//! Bounded line splitting over a buffered stream

use std::io::{self, BufRead};

use thiserror::Error;

/// Longest accepted line, terminator included
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

#[derive(Debug, Error)]
pub enum LineError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("line exceeds {limit} bytes")]
    TooLong { limit: usize },
}

/// Yields the segments of a stream, each ending in `\n` except possibly the last
pub struct LineReader<R> {
    inner: R,
    line: Vec<u8>,
    limit: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_limit(inner, MAX_LINE_BYTES)
    }

    pub fn with_limit(inner: R, limit: usize) -> Self {
        Self {
            inner,
            line: Vec::new(),
            limit,
        }
    }

    /// Reads the next segment, terminator included.
    ///
    /// Returns `Ok(None)` at end of stream. The returned slice is only valid
    /// until the next call.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>, LineError> {
        self.line.clear();

        loop {
            let available = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if available.is_empty() {
                break;
            }

            let (take, complete) = match available.iter().position(|&b| b == b'\n') {
                Some(pos) => (pos + 1, true),
                None => (available.len(), false),
            };

            if self.line.len() + take > self.limit {
                return Err(LineError::TooLong { limit: self.limit });
            }

            self.line.extend_from_slice(&available[..take]);
            self.inner.consume(take);

            if complete {
                break;
            }
        }

        if self.line.is_empty() {
            Ok(None)
        } else {
            Ok(Some(&self.line))
        }
    }
}
