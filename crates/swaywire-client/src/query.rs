//! Typed queries.
//!
//! Every query is the same round trip: a fixed kind, an optional payload, and
//! a JSON reply decoded into a record. Nothing is cached; each call asks the
//! compositor again.

use std::io::{Read, Write};

use serde::Deserialize;
use swaywire_frame::MessageKind;

use crate::connection::Connection;
use crate::error::Result;
use crate::types::{BarConfig, Config, Node, Output, Version, Workspace};

#[derive(Deserialize)]
struct SuccessReply {
    #[serde(alias = "Success")]
    success: bool,
}

impl<S: Read + Write> Connection<S> {
    /// List outputs in the order the compositor reports them.
    pub fn get_outputs(&mut self) -> Result<Vec<Output>> {
        self.request_json(MessageKind::GetOutputs, b"")
    }

    /// List workspaces.
    pub fn get_workspaces(&mut self) -> Result<Vec<Workspace>> {
        self.request_json(MessageKind::GetWorkspaces, b"")
    }

    /// Fetch the whole layout tree.
    pub fn get_tree(&mut self) -> Result<Node> {
        self.request_json(MessageKind::GetTree, b"")
    }

    /// List every mark set on a container.
    pub fn get_marks(&mut self) -> Result<Vec<String>> {
        self.request_json(MessageKind::GetMarks, b"")
    }

    /// List the ids of configured bars.
    pub fn get_bar_ids(&mut self) -> Result<Vec<String>> {
        self.request_json(MessageKind::GetBarConfig, b"")
    }

    /// Fetch the configuration of the bar named `id`.
    pub fn get_bar_config(&mut self, id: &str) -> Result<BarConfig> {
        self.request_json(MessageKind::GetBarConfig, id.as_bytes())
    }

    /// Fetch compositor version information.
    pub fn get_version(&mut self) -> Result<Version> {
        self.request_json(MessageKind::GetVersion, b"")
    }

    /// List binding mode names.
    pub fn get_binding_modes(&mut self) -> Result<Vec<String>> {
        self.request_json(MessageKind::GetBindingModes, b"")
    }

    /// Fetch the text of the last loaded config.
    pub fn get_config(&mut self) -> Result<Config> {
        self.request_json(MessageKind::GetConfig, b"")
    }

    /// Broadcast a tick event carrying `payload` to subscribers.
    ///
    /// Returns the compositor's success flag.
    pub fn send_tick(&mut self, payload: &str) -> Result<bool> {
        let reply: SuccessReply = self.request_json(MessageKind::SendTick, payload.as_bytes())?;
        Ok(reply.success)
    }

    /// Send an i3 sync request. sway answers `false`, as it has no X11 sync.
    pub fn sync(&mut self) -> Result<bool> {
        let reply: SuccessReply = self.request_json(MessageKind::Sync, b"")?;
        Ok(reply.success)
    }
}
