use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use swaywire_client::{Connection, FrameConfig, MessageKind, SocketLocator};
use tracing::debug;

use crate::exit::{client_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod get;
pub mod outputs;
pub mod run;
pub mod socket;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one or more sway commands.
    Run(RunArgs),
    /// List outputs.
    Outputs(OutputsArgs),
    /// Send any query and print the JSON reply.
    Get(GetArgs),
    /// Print the resolved IPC socket path.
    Socket(SocketArgs),
    /// Show version information.
    Version(VersionArgs),
}

/// Options shared by every subcommand that talks to sway.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub socket: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl ConnectOptions {
    pub fn resolve_path(&self) -> CliResult<PathBuf> {
        match &self.socket {
            Some(path) => Ok(path.clone()),
            None => SocketLocator::new()
                .resolve()
                .map_err(|err| client_error("socket discovery failed", err)),
        }
    }

    pub fn connect(&self) -> CliResult<Connection> {
        let path = self.resolve_path()?;
        debug!(?path, timeout = ?self.timeout, "connecting");
        let config = FrameConfig {
            read_timeout: self.timeout,
            write_timeout: self.timeout,
            ..FrameConfig::default()
        };
        Connection::open_with_config(&path, config)
            .map_err(|err| client_error(&format!("connect to {} failed", path.display()), err))
    }
}

pub fn run(command: Command, opts: &ConnectOptions, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Run(args) => run::run(args, opts, format),
        Command::Outputs(args) => outputs::run(args, opts, format),
        Command::Get(args) => get::run(args, opts, format),
        Command::Socket(args) => socket::run(args, opts, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Command text; words are joined with spaces. Separate sub-commands with `;` or `,`.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct OutputsArgs {}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum QueryType {
    Command,
    Workspaces,
    Outputs,
    Tree,
    Marks,
    BarConfig,
    Version,
    BindingModes,
    Config,
    Tick,
    Sync,
}

impl QueryType {
    pub fn message_kind(self) -> MessageKind {
        match self {
            QueryType::Command => MessageKind::RunCommand,
            QueryType::Workspaces => MessageKind::GetWorkspaces,
            QueryType::Outputs => MessageKind::GetOutputs,
            QueryType::Tree => MessageKind::GetTree,
            QueryType::Marks => MessageKind::GetMarks,
            QueryType::BarConfig => MessageKind::GetBarConfig,
            QueryType::Version => MessageKind::GetVersion,
            QueryType::BindingModes => MessageKind::GetBindingModes,
            QueryType::Config => MessageKind::GetConfig,
            QueryType::Tick => MessageKind::SendTick,
            QueryType::Sync => MessageKind::Sync,
        }
    }
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Message type to send.
    #[arg(value_enum)]
    pub query: QueryType,
    /// Optional payload (command text, bar id, tick payload).
    pub payload: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct SocketArgs {
    /// Also connect and report the compositor process id.
    #[arg(long)]
    pub probe: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

pub fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        _ => Ok(Duration::from_secs(value)),
    }
}
