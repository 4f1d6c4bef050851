use std::io::{ErrorKind, Read};

use bytes::Bytes;
use tracing::trace;

use crate::codec::{Frame, FrameConfig, Header, HEADER_SIZE};
use crate::error::{FrameError, Result};

/// Reads complete frames from any `Read` stream.
///
/// Reads exactly one header and exactly the payload it declares; nothing past
/// the frame is consumed, so no state carries over between calls.
pub struct FrameReader<T> {
    inner: T,
    config: FrameConfig,
}

impl<T: Read> FrameReader<T> {
    /// Create a new frame reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new frame reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self { inner, config }
    }

    /// Read the next frame header (blocking).
    ///
    /// Returns `Err(FrameError::ConnectionClosed)` when EOF is reached before
    /// the first byte, and `Err(FrameError::Truncated)` when EOF cuts the
    /// header short.
    pub fn read_header(&mut self) -> Result<Header> {
        let mut raw = [0u8; HEADER_SIZE];
        let received = self.fill(&mut raw)?;
        if received == 0 {
            return Err(FrameError::ConnectionClosed);
        }
        if received < HEADER_SIZE {
            return Err(FrameError::Truncated {
                expected: HEADER_SIZE,
                received,
            });
        }
        Header::decode(self.config.byte_order, &raw)
    }

    /// Read the next complete frame (blocking).
    ///
    /// A payload shorter than the header's length is an error, never a
    /// short buffer.
    pub fn read_frame(&mut self) -> Result<Frame> {
        let header = self.read_header()?;
        let expected = header.payload_len();
        if expected > self.config.max_payload_size {
            return Err(FrameError::PayloadTooLarge {
                size: expected,
                max: self.config.max_payload_size,
            });
        }

        let mut payload = vec![0u8; expected];
        let received = self.fill(&mut payload)?;
        if received < expected {
            return Err(FrameError::Truncated { expected, received });
        }

        trace!(kind = header.kind, length = expected, "read frame");
        Ok(Frame {
            kind: header.kind,
            payload: Bytes::from(payload),
        })
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current frame reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    // Fills `buf` unless EOF comes first; returns the number of bytes read.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0usize;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
        Ok(filled)
    }
}
