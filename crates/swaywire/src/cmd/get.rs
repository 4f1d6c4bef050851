use swaywire_client::ClientError;

use crate::cmd::{ConnectOptions, GetArgs};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_json, print_pretty_json, print_raw, OutputFormat};

pub fn run(args: GetArgs, opts: &ConnectOptions, format: OutputFormat) -> CliResult<i32> {
    let kind = args.query.message_kind();
    let payload = args.payload.unwrap_or_default();
    let mut conn = opts.connect()?;

    let context = format!("{kind} failed");
    let reply = conn
        .request(kind, payload.as_bytes())
        .map_err(|err| client_error(&context, err))?;

    if let OutputFormat::Raw = format {
        print_raw(&reply);
        return Ok(SUCCESS);
    }

    let value: serde_json::Value = serde_json::from_slice(&reply)
        .map_err(|err| client_error(&context, ClientError::Decode(err)))?;
    match format {
        OutputFormat::Json => print_json(&value),
        _ => print_pretty_json(&value),
    }
    Ok(SUCCESS)
}
