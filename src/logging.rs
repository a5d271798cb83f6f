//! Logger setup.
//!
//! The game owns the terminal while it runs, so log lines written to stderr
//! would tear the alternate screen. Logs go to a file (`gridwalk.log` unless
//! `GRIDWALK_LOG_PATH` says otherwise) with the game crates at `info`, so
//! every accepted move shows up as `MOVES: n`. With `GRIDWALK_LOG_PATH=-`
//! only warnings reach stderr. `RUST_LOG` overrides either default.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::config::Config;

/// Default filter for the given config.
pub fn default_filter(config: &Config) -> &'static str {
    if config.log_path.is_some() {
        "warn,gridwalk=info,gridwalk_core=info,gridwalk_engine=info"
    } else {
        "warn"
    }
}

/// Initialize the global logger. Call once, before entering the terminal.
pub fn init(config: &Config) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(config)));

    if let Some(path) = &config.log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("install logger")?;
    Ok(())
}
