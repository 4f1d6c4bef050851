use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use swaywire_client::{Mode, Output};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
    );
}

pub fn print_pretty_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
    );
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

/// Render decoded outputs. Raw output never reaches here; it is printed
/// before decoding.
pub fn print_outputs(outputs: &[Output], format: OutputFormat) {
    match format {
        OutputFormat::Json | OutputFormat::Raw => print_json(outputs),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["NAME", "MAKE", "MODEL", "ACTIVE", "SCALE", "MODE"]);
            for output in outputs {
                table.add_row(vec![
                    output.name.clone(),
                    output.make.clone(),
                    output.model.clone(),
                    output.active.to_string(),
                    format_scale(output.scale),
                    output
                        .current_mode
                        .as_ref()
                        .map(format_mode)
                        .unwrap_or_else(|| "-".to_string()),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for output in outputs {
                println!(
                    "Output {} '{} {} {}'{}",
                    output.name,
                    output.make,
                    output.model,
                    output.serial,
                    if output.active { "" } else { " (inactive)" }
                );
                if let Some(mode) = &output.current_mode {
                    println!("  Current mode: {}", format_mode(mode));
                }
                if output.active {
                    println!("  Scale factor: {}", format_scale(output.scale));
                }
                if !output.modes.is_empty() {
                    println!("  Available modes:");
                    for mode in &output.modes {
                        println!("    {}", format_mode(mode));
                    }
                }
            }
        }
    }
}

fn format_mode(mode: &Mode) -> String {
    format!(
        "{}x{} @ {:.3} Hz",
        mode.width,
        mode.height,
        f64::from(mode.refresh) / 1000.0
    )
}

fn format_scale(scale: f64) -> String {
    format!("{scale:.2}")
}
