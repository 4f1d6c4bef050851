use serde::Serialize;

use crate::cmd::{ConnectOptions, SocketArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, OutputFormat};

#[derive(Serialize)]
struct SocketOutput {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reachable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pid: Option<u32>,
}

pub fn run(args: SocketArgs, opts: &ConnectOptions, format: OutputFormat) -> CliResult<i32> {
    let path = opts.resolve_path()?;

    let mut out = SocketOutput {
        path: path.display().to_string(),
        reachable: None,
        pid: None,
    };
    if args.probe {
        match opts.connect() {
            Ok(conn) => {
                out.reachable = Some(true);
                out.pid = conn.peer_credentials().map(|(_, _, pid)| pid);
            }
            Err(err) => {
                tracing::warn!(error = %err, "socket probe failed");
                out.reachable = Some(false);
            }
        }
    }

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Raw => println!("{}", out.path),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("{}", out.path);
            if let Some(reachable) = out.reachable {
                println!("reachable: {reachable}");
            }
            if let Some(pid) = out.pid {
                println!("pid: {pid}");
            }
        }
    }
    Ok(SUCCESS)
}
