//! Control and query the sway compositor over its IPC socket.
//!
//! # Crate Structure
//!
//! - [`transport`] — Unix domain socket connect and the raw byte stream
//! - [`frame`] — `i3-ipc` frame header codec and exact-length frame I/O
//! - [`client`] — socket discovery, [`Connection`], commands and typed queries
//!
//! The most used client types are re-exported at the crate root.

/// Re-export transport types.
pub mod transport {
    pub use swaywire_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use swaywire_frame::*;
}

/// Re-export client types.
pub mod client {
    pub use swaywire_client::*;
}

pub use swaywire_client::{
    socket_path, ClientError, CommandOutcome, Connection, MessageKind, Output, Result,
};
