use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use mia_console::config::ClientConfig;
use mia_console::logging::{self, LogTarget};

use crate::Commands;

#[derive(Parser)]
#[command(name = "mia")]
#[command(about = "Console client for the MIA disk command gateway", long_about = None)]
pub(crate) struct Cli {
    /// Gateway base URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// JSON config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pause between batch commands, in milliseconds
    #[arg(long = "pace-ms", global = true, value_name = "MS")]
    pace_ms: Option<u64>,

    /// Append diagnostic logs to this file
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = ClientConfig::load(cli.config.as_deref())?
        .with_overrides(cli.url, cli.pace_ms)
        .validate()?;

    match cli.command {
        None => {
            let target = match cli.log_file {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Off,
            };
            logging::init(target)?;
            mia_console::tui::run_with_options(mia_console::tui::TuiRunOptions { config })?;
        }
        Some(command) => {
            let target = match cli.log_file {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Stderr,
            };
            logging::init(target)?;
            crate::cli_exec::handle_command(&config, command)?
        }
    }

    Ok(())
}
