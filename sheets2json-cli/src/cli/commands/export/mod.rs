//! Export command: spreadsheet range to JSON

mod handler;

pub use handler::{handle_export_command, records_from_grid};

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::api::ValueRenderOption;
use crate::output::OutputFormat;

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Spreadsheet ID, as found in the sheet's URL
    pub spreadsheet_id: String,

    /// Worksheet name (default: first worksheet)
    pub worksheet: Option<String>,

    /// Cell range in A1 notation, e.g. A1:D100 (default: A:ZZ)
    pub range: Option<String>,

    /// Path to credential JSON file
    #[arg(short, long, value_name = "PATH")]
    pub credential: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON layout
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    pub format: FormatArg,

    /// How cell values are rendered by the API
    #[arg(long, value_enum, default_value_t = RenderArg::Formatted)]
    pub render: RenderArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Pretty-printed with two-space indentation
    Json,
    /// Single line
    JsonCompact,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::JsonCompact => OutputFormat::JsonCompact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderArg {
    /// Displayed text; every value is a string
    Formatted,
    /// Typed values; numbers and booleans keep their JSON type
    Unformatted,
    /// Formulas instead of computed values
    Formula,
}

impl From<RenderArg> for ValueRenderOption {
    fn from(arg: RenderArg) -> Self {
        match arg {
            RenderArg::Formatted => ValueRenderOption::Formatted,
            RenderArg::Unformatted => ValueRenderOption::Unformatted,
            RenderArg::Formula => ValueRenderOption::Formula,
        }
    }
}
