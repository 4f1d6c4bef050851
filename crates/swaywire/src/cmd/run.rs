use swaywire_client::{first_failure, ClientError, CommandOutcome, MessageKind};

use crate::cmd::{ConnectOptions, RunArgs};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_json, print_raw, OutputFormat};

pub fn run(args: RunArgs, opts: &ConnectOptions, format: OutputFormat) -> CliResult<i32> {
    let text = args.command.join(" ");
    let mut conn = opts.connect()?;

    match format {
        OutputFormat::Raw => {
            let reply = conn
                .request(MessageKind::RunCommand, text.as_bytes())
                .map_err(|err| client_error("run failed", err))?;
            print_raw(&reply);
            let outcomes: Vec<CommandOutcome> = serde_json::from_slice(&reply)
                .map_err(|err| client_error("run failed", ClientError::Decode(err)))?;
            first_failure(&outcomes).map_err(|err| client_error("run failed", err))?;
        }
        OutputFormat::Json => {
            let outcomes = conn
                .run_command(&text)
                .map_err(|err| client_error("run failed", err))?;
            print_json(&outcomes);
            first_failure(&outcomes).map_err(|err| client_error("run failed", err))?;
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            conn.run(&text)
                .map_err(|err| client_error("run failed", err))?;
        }
    }

    Ok(SUCCESS)
}
