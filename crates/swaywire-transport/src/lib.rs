//! Transport layer for the sway IPC channel.
//!
//! The compositor listens on a Unix domain socket. This crate dials it and
//! hands back an [`IpcStream`], a plain blocking `Read + Write` byte stream.
//! Framing and message semantics live in `swaywire-frame` and
//! `swaywire-client`.
//!
//! Unix only.

pub mod error;
pub mod stream;
pub mod uds;

pub use error::{Result, TransportError};
pub use stream::IpcStream;
pub use uds::{connect, MAX_PATH_LEN};
