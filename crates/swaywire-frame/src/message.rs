//! Message kinds.
//!
//! The numeric tags are fixed by the compositor. Do not reorder variants.

use std::fmt;

/// The operation a request asks the compositor to perform.
///
/// Replies echo the kind of the request they answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum MessageKind {
    /// Run one or more commands (payload: command text).
    RunCommand = 0,
    /// List workspaces.
    GetWorkspaces = 1,
    /// Subscribe to events. Defined for tag completeness; events are not consumed here.
    Subscribe = 2,
    /// List outputs.
    GetOutputs = 3,
    /// Fetch the layout tree.
    GetTree = 4,
    /// List container marks.
    GetMarks = 5,
    /// List bar ids, or fetch one bar's config when the payload names it.
    GetBarConfig = 6,
    /// Fetch version information.
    GetVersion = 7,
    /// List binding modes.
    GetBindingModes = 8,
    /// Fetch the loaded config text.
    GetConfig = 9,
    /// Broadcast a tick event with the payload.
    SendTick = 10,
    /// i3 sync request.
    Sync = 11,
}

impl MessageKind {
    /// Every kind, in tag order.
    pub const ALL: [MessageKind; 12] = [
        MessageKind::RunCommand,
        MessageKind::GetWorkspaces,
        MessageKind::Subscribe,
        MessageKind::GetOutputs,
        MessageKind::GetTree,
        MessageKind::GetMarks,
        MessageKind::GetBarConfig,
        MessageKind::GetVersion,
        MessageKind::GetBindingModes,
        MessageKind::GetConfig,
        MessageKind::SendTick,
        MessageKind::Sync,
    ];

    /// The wire tag.
    pub fn tag(self) -> u32 {
        self as u32
    }

    /// Stable lowercase name, e.g. `get_outputs`.
    pub fn name(self) -> &'static str {
        match self {
            MessageKind::RunCommand => "run_command",
            MessageKind::GetWorkspaces => "get_workspaces",
            MessageKind::Subscribe => "subscribe",
            MessageKind::GetOutputs => "get_outputs",
            MessageKind::GetTree => "get_tree",
            MessageKind::GetMarks => "get_marks",
            MessageKind::GetBarConfig => "get_bar_config",
            MessageKind::GetVersion => "get_version",
            MessageKind::GetBindingModes => "get_binding_modes",
            MessageKind::GetConfig => "get_config",
            MessageKind::SendTick => "send_tick",
            MessageKind::Sync => "sync",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A wire tag with no matching [`MessageKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown message kind {0}")]
pub struct UnknownMessageKind(pub u32);

impl TryFrom<u32> for MessageKind {
    type Error = UnknownMessageKind;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        MessageKind::ALL
            .get(tag as usize)
            .copied()
            .ok_or(UnknownMessageKind(tag))
    }
}

impl From<MessageKind> for u32 {
    fn from(kind: MessageKind) -> Self {
        kind.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_follow_declaration_order() {
        for (expected, kind) in MessageKind::ALL.iter().enumerate() {
            assert_eq!(kind.tag(), expected as u32);
        }
        assert_eq!(MessageKind::RunCommand.tag(), 0);
        assert_eq!(MessageKind::GetOutputs.tag(), 3);
        assert_eq!(MessageKind::Sync.tag(), 11);
    }

    #[test]
    fn try_from_maps_known_tags() {
        assert_eq!(MessageKind::try_from(4), Ok(MessageKind::GetTree));
        assert_eq!(MessageKind::try_from(10), Ok(MessageKind::SendTick));
    }

    #[test]
    fn try_from_rejects_unknown_tags() {
        assert_eq!(MessageKind::try_from(12), Err(UnknownMessageKind(12)));
        // Event replies set the high bit.
        assert_eq!(
            MessageKind::try_from(0x8000_0000),
            Err(UnknownMessageKind(0x8000_0000))
        );
    }

    #[test]
    fn display_uses_snake_case_name() {
        assert_eq!(MessageKind::GetBindingModes.to_string(), "get_binding_modes");
    }
}
