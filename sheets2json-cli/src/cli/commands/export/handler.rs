//! Export command handler

use anyhow::{Context, Result, bail};
use log::{debug, info};
use std::env;
use std::sync::Arc;
use std::time::Instant;

use super::ExportCommand;
use crate::api::{RangeSpec, ServiceAccountAuth, SheetsClient};
use crate::config::{CREDENTIAL_ENV, Config, resolve_credential_path};
use crate::output::write_records;
use crate::sheet::{CellGrid, RecordSet, build_record_set};

/// Fetch the requested range and write it out as JSON records
pub async fn handle_export_command(args: ExportCommand) -> Result<()> {
    let config = Config::load()?;

    let (credential_path, source) =
        resolve_credential_path(args.credential.as_deref(), env::var(CREDENTIAL_ENV).ok(), &config)?;
    debug!(
        "Using credential file {} (from {})",
        credential_path.display(),
        source
    );

    let auth = ServiceAccountAuth::from_key_file(&credential_path).await?;
    let client = SheetsClient::new(Arc::new(auth))?
        .with_base_url(config.api_base_url())
        .with_retry(config.retry_config())
        .with_render_option(args.render.into());

    let range = RangeSpec::new(args.worksheet, args.range).to_a1(config.default_columns());

    let start = Instant::now();
    let grid = client
        .fetch_range(&args.spreadsheet_id, &range)
        .await
        .context("Unable to retrieve data from sheet")?;
    debug!("Fetch time: {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    let records = records_from_grid(grid)?;
    debug!("Converted {} data rows", records.len());

    write_records(&records, args.format.into(), args.output.as_deref())?;

    if let Some(path) = &args.output {
        info!("Data saved to {}", path.display());
    }

    Ok(())
}

/// Build records from a fetched grid; a grid without rows is an error here
pub fn records_from_grid(grid: CellGrid) -> Result<RecordSet> {
    if grid.is_empty() {
        bail!("No data found");
    }

    Ok(build_record_set(&grid))
}
