/// Errors that can occur in client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Neither the environment nor the helper command produced a socket path.
    #[error("unable to locate the sway IPC socket")]
    NoAddressFound,

    /// Transport-level error (connect, socket options).
    #[error("transport error: {0}")]
    Transport(#[from] swaywire_transport::TransportError),

    /// Frame-level error (I/O, short read, bad header).
    #[error("frame error: {0}")]
    Frame(#[from] swaywire_frame::FrameError),

    /// An earlier request on this connection failed mid-exchange, so the
    /// stream may hold a stale or partial reply. Open a new connection.
    #[error("connection is unusable after an earlier failed request")]
    ConnectionBroken,

    /// The reply payload did not match the expected JSON shape.
    #[error("failed to decode reply: {0}")]
    Decode(#[from] serde_json::Error),

    /// A sub-command reported failure. Carries that sub-command's error text.
    #[error("{message}")]
    CommandFailed { message: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;
