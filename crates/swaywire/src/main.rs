mod cmd;
mod exit;
mod logging;
mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::{parse_duration, Command, ConnectOptions};
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "swaywire", version, about = "Control and query sway over IPC")]
struct Cli {
    /// IPC socket path. Default: $SWAYSOCK, then `sway --get-socketpath`.
    #[arg(long, short = 's', value_name = "PATH", global = true)]
    socket: Option<PathBuf>,

    /// Give up on a blocked read or write after this long (e.g. 5s, 500ms).
    #[arg(long, value_name = "DURATION", global = true)]
    timeout: Option<String>,

    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = connect_options(&cli).and_then(|opts| cmd::run(cli.command, &opts, format));

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

fn connect_options(cli: &Cli) -> exit::CliResult<ConnectOptions> {
    let timeout = cli.timeout.as_deref().map(parse_duration).transpose()?;
    Ok(ConnectOptions {
        socket: cli.socket.clone(),
        timeout,
    })
}
