//! Reply records.
//!
//! Field names follow the compositor's lowercase JSON keys. Absent keys take
//! their defaults and unknown keys are ignored, so replies from newer
//! compositors still decode.

use serde::{Deserialize, Serialize};

/// A rectangle in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// One display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Mode {
    #[serde(alias = "Width")]
    pub width: i32,
    #[serde(alias = "Height")]
    pub height: i32,
    /// Refresh rate as reported by the compositor (sway uses mHz).
    #[serde(alias = "Refresh")]
    pub refresh: i32,
}

/// A display output, as listed by `GET_OUTPUTS`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Make")]
    pub make: String,
    #[serde(alias = "Model")]
    pub model: String,
    #[serde(alias = "Serial")]
    pub serial: String,
    #[serde(alias = "Active")]
    pub active: bool,
    /// Scale factor. Disabled outputs report `-1`.
    #[serde(alias = "Scale")]
    pub scale: f64,
    /// Every mode the output supports.
    #[serde(alias = "Modes")]
    pub modes: Vec<Mode>,
    /// Mode in use, absent for disabled outputs.
    pub current_mode: Option<Mode>,
    pub focused: bool,
    pub primary: bool,
    pub transform: Option<String>,
    pub current_workspace: Option<String>,
    pub rect: Option<Rect>,
}

/// A workspace, as listed by `GET_WORKSPACES`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Workspace {
    pub num: i32,
    pub name: String,
    pub visible: bool,
    pub focused: bool,
    pub urgent: bool,
    pub output: String,
    pub rect: Rect,
}

/// A node of the layout tree returned by `GET_TREE`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    pub id: i64,
    pub name: Option<String>,
    /// `root`, `output`, `workspace`, `con` or `floating_con`.
    #[serde(rename = "type")]
    pub node_type: String,
    pub layout: String,
    pub rect: Rect,
    pub focused: bool,
    pub urgent: bool,
    pub marks: Vec<String>,
    pub app_id: Option<String>,
    pub pid: Option<i32>,
    pub nodes: Vec<Node>,
    pub floating_nodes: Vec<Node>,
}

impl Node {
    /// Depth-first walk over this node and all its descendants, tiling
    /// children before floating ones.
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter { stack: vec![self] }
    }

    /// The focused node, if any.
    pub fn find_focused(&self) -> Option<&Node> {
        self.iter().find(|node| node.focused)
    }
}

/// Iterator returned by [`Node::iter`].
#[derive(Debug)]
pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.floating_nodes.iter().rev());
        self.stack.extend(node.nodes.iter().rev());
        Some(node)
    }
}

/// Compositor version, from `GET_VERSION`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
    pub human_readable: String,
    pub loaded_config_file_name: String,
}

/// One bar's configuration, from `GET_BAR_CONFIG` with a bar id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    pub id: String,
    pub mode: String,
    pub position: String,
    pub status_command: Option<String>,
    pub font: String,
    pub workspace_buttons: bool,
    pub binding_mode_indicator: bool,
    pub verbose: bool,
}

/// Loaded config text, from `GET_CONFIG`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub config: String,
}
