//! Framing for the i3/sway IPC protocol.
//!
//! Every message in either direction is one frame:
//! - A 6-byte magic token, the ASCII string `i3-ipc`
//! - A 4-byte payload length
//! - A 4-byte message kind
//!
//! The two integers use the host's native byte order on the wire, because
//! that is what the compositor writes. [`ByteOrder`] makes the choice explicit
//! at every encode and decode call.

pub mod codec;
pub mod error;
pub mod message;
pub mod reader;
pub mod writer;

pub use codec::{
    encode_frame, ByteOrder, Frame, FrameConfig, Header, DEFAULT_MAX_PAYLOAD, HEADER_SIZE, MAGIC,
};
pub use error::{FrameError, Result};
pub use message::{MessageKind, UnknownMessageKind};
pub use reader::FrameReader;
pub use writer::FrameWriter;
