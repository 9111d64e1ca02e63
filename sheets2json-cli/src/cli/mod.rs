//! Command-line interface

pub mod commands;

use clap::Parser;

use commands::export::ExportCommand;

/// Version string; set `SHEETS2JSON_VERSION` at build time to override
pub const VERSION: &str = match option_env!("SHEETS2JSON_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

#[derive(Debug, Parser)]
#[command(
    name = "sheets2json",
    version = VERSION,
    about = "Export a Google Sheets range as a JSON array of objects",
    long_about = "Reads SPREADSHEET_ID (optionally a WORKSHEET and RANGE), uses the first row \
                  as field names and prints one JSON object per remaining row, keeping the \
                  sheet's column order."
)]
pub struct Cli {
    #[command(flatten)]
    pub export: ExportCommand,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
