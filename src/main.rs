// src/main.rs

mod cli;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use desktop_postinstall::{run_hook, HookReport, SystemRunner, DESTDIR_VAR};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for the progress notices
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // A bad command line must not fail the install
            warn!("Ignoring invalid arguments: {}", e);
            return Ok(());
        }
    };

    let destdir = std::env::var_os(DESTDIR_VAR).map(|v| v.to_string_lossy().into_owned());
    let config = cli.into_config(destdir);

    match run_hook(&config, &SystemRunner::new()) {
        HookReport::Skipped(reason) => {
            info!("Nothing to do: {}", reason);
        }
        HookReport::Refreshed(results) => {
            info!(
                "Triggers: {} succeeded, {} failed, {} skipped",
                results.succeeded, results.failed, results.skipped
            );
        }
    }

    Ok(())
}
