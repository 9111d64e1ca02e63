//! JSON output of record sets to stdout or a file

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::sheet::Record;

/// JSON layout of the written document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Two-space indented
    #[default]
    Json,
    /// Single line
    JsonCompact,
}

/// Serialize records as a JSON array followed by a newline
pub fn write_records_to<W: Write>(mut writer: W, records: &[Record], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => serde_json::to_writer_pretty(&mut writer, records),
        OutputFormat::JsonCompact => serde_json::to_writer(&mut writer, records),
    }
    .context("Error encoding JSON")?;

    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write to `destination`, or stdout when `None`. The file is truncated.
pub fn write_records(
    records: &[Record],
    format: OutputFormat,
    destination: Option<&Path>,
) -> Result<()> {
    match destination {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Error creating output file: {}", path.display()))?;
            write_records_to(BufWriter::new(file), records, format)
                .with_context(|| format!("Error writing output file: {}", path.display()))
        }
        None => {
            let stdout = io::stdout();
            write_records_to(stdout.lock(), records, format)
        }
    }
}
