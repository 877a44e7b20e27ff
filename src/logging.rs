//! File logging for the terminal client.
//!
//! The terminal belongs to the game view, so log records never go to
//! stdout/stderr. They are appended to `BLOCKDROP_LOG_PATH` when it is set and
//! dropped otherwise.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::Config;

/// Install the global logger. Returns `false` when logging is disabled.
pub fn init_logging(config: &Config) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;

    log::info!(
        "blockdrop {} starting: seed {} randomizer {} tick {}ms",
        env!("CARGO_PKG_VERSION"),
        config.seed,
        config.randomizer.as_str(),
        config.tick_ms
    );
    Ok(true)
}
