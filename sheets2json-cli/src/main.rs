use anyhow::Result;
use clap::Parser;

use sheets2json::cli::Cli;
use sheets2json::cli::commands::export::handle_export_command;

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file may hold GOOGLE_SHEETS_CREDENTIAL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    handle_export_command(cli.export).await
}

/// Logs go to stderr so stdout stays valid JSON. `RUST_LOG` overrides the default.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,sheets2json=debug"
    } else {
        "warn,sheets2json=info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
