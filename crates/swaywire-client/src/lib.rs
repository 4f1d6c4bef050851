//! Blocking client for the sway (i3-compatible) IPC protocol.
//!
//! Find the socket, open a [`Connection`], and call typed operations on it:
//!
//! ```no_run
//! use swaywire_client::Connection;
//!
//! let mut conn = Connection::connect()?;
//! conn.run("workspace 2")?;
//! for output in conn.get_outputs()? {
//!     println!("{} active={}", output.name, output.active);
//! }
//! # Ok::<(), swaywire_client::ClientError>(())
//! ```
//!
//! Every call is one synchronous round trip. A [`Connection`] serves one
//! request at a time; share it behind a `Mutex` or open one per thread.

pub mod command;
pub mod connection;
pub mod error;
pub mod locator;
pub mod query;
pub mod types;

pub use command::{first_failure, CommandOutcome};
pub use connection::Connection;
pub use error::{ClientError, Result};
pub use locator::{
    socket_path, Environment, LocateStrategy, SocketLocator, SystemEnvironment,
    DEFAULT_STRATEGIES, HELPER_ARGS, HELPER_PROGRAM, SOCKET_ENV,
};
pub use swaywire_frame::{ByteOrder, FrameConfig, MessageKind};
pub use types::{BarConfig, Config, Mode, Node, Output, Rect, Version, Workspace};
