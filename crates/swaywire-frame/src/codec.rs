use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};
use crate::message::MessageKind;

/// Frame header: magic (6) + length (4) + kind (4) = 14 bytes.
pub const HEADER_SIZE: usize = 14;

/// Magic bytes: "i3-ipc".
pub const MAGIC: [u8; 6] = *b"i3-ipc";

/// Default maximum payload size: 16 MiB.
pub const DEFAULT_MAX_PAYLOAD: usize = 16 * 1024 * 1024;

/// Byte order of the two integer header fields.
///
/// The compositor writes them in its own native order, so [`ByteOrder::Native`]
/// is the only choice that talks to a real peer. `Little` and `Big` pin the
/// layout regardless of host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    /// The concrete order this value stands for on the running host.
    pub fn resolve(self) -> ByteOrder {
        match self {
            #[cfg(target_endian = "little")]
            ByteOrder::Native => ByteOrder::Little,
            #[cfg(target_endian = "big")]
            ByteOrder::Native => ByteOrder::Big,
            other => other,
        }
    }

    fn put_u32(self, dst: &mut BytesMut, value: u32) {
        match self {
            ByteOrder::Native => dst.put_u32_ne(value),
            ByteOrder::Little => dst.put_u32_le(value),
            ByteOrder::Big => dst.put_u32(value),
        }
    }

    fn read_u32(self, src: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Native => u32::from_ne_bytes(src),
            ByteOrder::Little => u32::from_le_bytes(src),
            ByteOrder::Big => u32::from_be_bytes(src),
        }
    }
}

/// A decoded frame header.
///
/// `kind` stays a raw tag: replies are not checked against the request kind,
/// and event tags have no [`MessageKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Payload byte count.
    pub length: u32,
    /// Message kind tag.
    pub kind: u32,
}

impl Header {
    /// Header for a payload of `length` bytes.
    pub fn new(kind: MessageKind, length: u32) -> Self {
        Self {
            length,
            kind: kind.tag(),
        }
    }

    /// The kind, if the tag is one this crate knows.
    pub fn message_kind(&self) -> Option<MessageKind> {
        MessageKind::try_from(self.kind).ok()
    }

    /// Payload length as a `usize`.
    pub fn payload_len(&self) -> usize {
        self.length as usize
    }

    /// Append the 14 header bytes to `dst`.
    pub fn encode(&self, order: ByteOrder, dst: &mut BytesMut) {
        dst.reserve(HEADER_SIZE);
        dst.put_slice(&MAGIC);
        order.put_u32(dst, self.length);
        order.put_u32(dst, self.kind);
    }

    /// Decode a header, rejecting anything that does not start with [`MAGIC`].
    pub fn decode(order: ByteOrder, src: &[u8; HEADER_SIZE]) -> Result<Self> {
        if src[..6] != MAGIC {
            return Err(FrameError::InvalidMagic);
        }

        let mut length = [0u8; 4];
        length.copy_from_slice(&src[6..10]);
        let mut kind = [0u8; 4];
        kind.copy_from_slice(&src[10..14]);

        Ok(Self {
            length: order.read_u32(length),
            kind: order.read_u32(kind),
        })
    }
}

/// A complete frame as read off the wire.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw kind tag from the header.
    pub kind: u32,
    /// The message payload.
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame.
    pub fn new(kind: MessageKind, payload: impl Into<Bytes>) -> Self {
        Self {
            kind: kind.tag(),
            payload: payload.into(),
        }
    }

    /// The kind, if the tag is one this crate knows.
    pub fn message_kind(&self) -> Option<MessageKind> {
        MessageKind::try_from(self.kind).ok()
    }

    /// The total wire size of this frame (header + payload).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

/// Encode a frame into the wire format.
///
/// Wire format:
/// ```text
/// ┌──────────────┬───────────┬───────────┬─────────────────┐
/// │ Magic (6B)   │ Length    │ Kind      │ Payload         │
/// │ "i3-ipc"     │ (4B, ord) │ (4B, ord) │ (Length bytes)  │
/// └──────────────┴───────────┴───────────┴─────────────────┘
/// ```
pub fn encode_frame(
    kind: MessageKind,
    payload: &[u8],
    order: ByteOrder,
    dst: &mut BytesMut,
) -> Result<()> {
    let length = u32::try_from(payload.len()).map_err(|_| FrameError::PayloadTooLarge {
        size: payload.len(),
        max: u32::MAX as usize,
    })?;
    dst.reserve(HEADER_SIZE + payload.len());
    Header::new(kind, length).encode(order, dst);
    dst.put_slice(payload);
    Ok(())
}

/// Configuration for frame I/O.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Byte order of header integers. Default: native.
    pub byte_order: ByteOrder,
    /// Maximum payload size in bytes, either direction. Default: 16 MiB.
    pub max_payload_size: usize,
    /// Read timeout for blocking operations. Default: none.
    pub read_timeout: Option<std::time::Duration>,
    /// Write timeout for blocking operations. Default: none.
    pub write_timeout: Option<std::time::Duration>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Native,
            max_payload_size: DEFAULT_MAX_PAYLOAD,
            read_timeout: None,
            write_timeout: None,
        }
    }
}
