use std::io::{Read, Write};
use std::path::Path;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use swaywire_frame::{Frame, FrameConfig, FrameError, FrameReader, FrameWriter, MessageKind};
use swaywire_transport::IpcStream;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::locator::socket_path;

/// One open channel to the compositor.
///
/// Each request is a complete write-then-read round trip. Requests take
/// `&mut self`, so two can never overlap on the same connection.
///
/// A request that fails while framing (I/O error, timeout, short or oversized
/// reply) leaves the stream out of step with the compositor. The connection is
/// then marked broken and every later request fails with
/// [`ClientError::ConnectionBroken`].
#[derive(Debug)]
pub struct Connection<S = IpcStream> {
    stream: S,
    config: FrameConfig,
    broken: bool,
}

impl Connection<IpcStream> {
    /// Locate the socket with the default locator and connect to it.
    pub fn connect() -> Result<Self> {
        let path = socket_path()?;
        Self::open(path)
    }

    /// Connect to the socket at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, FrameConfig::default())
    }

    /// Connect to the socket at `path` with explicit frame configuration.
    ///
    /// Read and write timeouts from `config` are applied to the socket.
    pub fn open_with_config(path: impl AsRef<Path>, config: FrameConfig) -> Result<Self> {
        let stream = swaywire_transport::connect(path.as_ref())?;
        stream.set_read_timeout(config.read_timeout)?;
        stream.set_write_timeout(config.write_timeout)?;
        Ok(Self::from_stream(stream, config))
    }

    /// `(uid, gid, pid)` of the compositor process, where the platform exposes it.
    pub fn peer_credentials(&self) -> Option<(u32, u32, u32)> {
        self.stream.peer_credentials()
    }
}

impl<S: Read + Write> Connection<S> {
    /// Wrap an already connected stream.
    pub fn from_stream(stream: S, config: FrameConfig) -> Self {
        Self {
            stream,
            config,
            broken: false,
        }
    }

    /// Send one request and return the whole reply frame.
    ///
    /// The reply kind is passed through unchecked.
    pub fn request_frame(&mut self, kind: MessageKind, payload: &[u8]) -> Result<Frame> {
        if self.broken {
            return Err(ClientError::ConnectionBroken);
        }
        let reply = self.exchange(kind, payload).inspect_err(|err| {
            warn!(%kind, error = %err, "request failed, connection is no longer usable");
            self.broken = true;
        })?;
        debug!(
            %kind,
            request_len = payload.len(),
            reply_kind = reply.kind,
            reply_len = reply.payload.len(),
            "ipc round trip"
        );
        Ok(reply)
    }

    fn exchange(
        &mut self,
        kind: MessageKind,
        payload: &[u8],
    ) -> std::result::Result<Frame, FrameError> {
        FrameWriter::with_config(&mut self.stream, self.config.clone()).send(kind, payload)?;
        FrameReader::with_config(&mut self.stream, self.config.clone()).read_frame()
    }

    /// Whether an earlier request failed and left the stream unusable.
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Send one request and return the raw reply payload.
    pub fn request(&mut self, kind: MessageKind, payload: &[u8]) -> Result<Bytes> {
        Ok(self.request_frame(kind, payload)?.payload)
    }

    /// Send one request and decode the reply as JSON.
    pub fn request_json<T: DeserializeOwned>(
        &mut self,
        kind: MessageKind,
        payload: &[u8],
    ) -> Result<T> {
        let reply = self.request(kind, payload)?;
        Ok(serde_json::from_slice(&reply)?)
    }

    /// Frame configuration in effect.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Close the connection and return the stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}
