//! Diagnostic logging setup for the binary.
//!
//! The terminal UI owns stdout and stderr while a game runs, so log records
//! go to a file. The level comes from `RUST_LOG` (default `info`).

use std::fs::OpenOptions;
use std::io::Write;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::config::AppConfig;

/// Install the global logger. Does nothing when logging is disabled.
pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {:?}", path))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}: {}",
                buf.timestamp_millis(),
                record.target(),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .context("logger already initialized")?;
    Ok(())
}
