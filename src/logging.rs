//! Diagnostic logging. Never mixed into the command transcript.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MIA_LOG";

#[derive(Clone, Debug)]
pub enum LogTarget {
    /// Headless runs: warnings and above unless `MIA_LOG` says otherwise.
    Stderr,
    /// TUI runs own the terminal; logs go to a file only when asked.
    File(PathBuf),
    Off,
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init(target: LogTarget) -> Result<()> {
    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter("warn"))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|err| anyhow::anyhow!(err))
            .context("install stderr logger"),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("create parent directories for log path {}", path.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow::anyhow!(err))
                .context("install file logger")
        }
    }
}
