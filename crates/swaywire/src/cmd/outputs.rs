use swaywire_client::MessageKind;

use crate::cmd::{ConnectOptions, OutputsArgs};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_outputs, print_raw, OutputFormat};

pub fn run(_args: OutputsArgs, opts: &ConnectOptions, format: OutputFormat) -> CliResult<i32> {
    let mut conn = opts.connect()?;

    if let OutputFormat::Raw = format {
        let reply = conn
            .request(MessageKind::GetOutputs, b"")
            .map_err(|err| client_error("get_outputs failed", err))?;
        print_raw(&reply);
        return Ok(SUCCESS);
    }

    let outputs = conn
        .get_outputs()
        .map_err(|err| client_error("get_outputs failed", err))?;
    print_outputs(&outputs, format);
    Ok(SUCCESS)
}
