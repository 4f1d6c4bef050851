//! Command execution.
//!
//! A `RUN_COMMAND` payload may hold several sub-commands separated by `;` or
//! `,`. The reply has one outcome per sub-command.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use swaywire_frame::MessageKind;

use crate::connection::Connection;
use crate::error::{ClientError, Result};

/// Result of one sub-command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    #[serde(alias = "Success")]
    pub success: bool,
    #[serde(default, alias = "Error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Set when the compositor could not parse the sub-command.
    #[serde(default)]
    pub parse_error: bool,
}

/// Collapse outcomes into one result.
///
/// Fails with the error text of the first unsuccessful outcome. Outcomes after
/// it are not looked at.
pub fn first_failure(outcomes: &[CommandOutcome]) -> Result<()> {
    match outcomes.iter().find(|outcome| !outcome.success) {
        Some(failed) => Err(ClientError::CommandFailed {
            message: failed.error.clone().unwrap_or_default(),
        }),
        None => Ok(()),
    }
}

impl<S: Read + Write> Connection<S> {
    /// Run `command` and return every sub-command's outcome as reported.
    pub fn run_command(&mut self, command: &str) -> Result<Vec<CommandOutcome>> {
        self.request_json(MessageKind::RunCommand, command.as_bytes())
    }

    /// Run `command`; succeed only if every sub-command succeeded.
    pub fn run(&mut self, command: &str) -> Result<()> {
        let outcomes = self.run_command(command)?;
        first_failure(&outcomes)
    }
}
