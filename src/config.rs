//! Runtime configuration from `BLOCKDROP_*` environment variables.
//!
//! Empty or whitespace-only values count as unset. Anything else must parse,
//! otherwise the binary refuses to start and names the variable.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;
use thiserror::Error;

use crate::core::{GameConfig, Randomizer};
use crate::types::{SWIPE_THRESHOLD_PX, TICK_MS};

pub const ENV_SEED: &str = "BLOCKDROP_SEED";
pub const ENV_RANDOMIZER: &str = "BLOCKDROP_RANDOMIZER";
pub const ENV_TICK_MS: &str = "BLOCKDROP_TICK_MS";
pub const ENV_SWIPE_PX: &str = "BLOCKDROP_SWIPE_PX";
pub const ENV_LOG_PATH: &str = "BLOCKDROP_LOG_PATH";
pub const ENV_LOG_LEVEL: &str = "BLOCKDROP_LOG_LEVEL";

const MAX_TICK_MS: u32 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: `{value}` is not a valid number")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var}: {value} is out of range ({min}..={max})")]
    OutOfRange {
        var: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("BLOCKDROP_RANDOMIZER: unknown randomizer `{0}` (expected `uniform` or `bag7`)")]
    UnknownRandomizer(String),
    #[error("BLOCKDROP_LOG_LEVEL: unknown log level `{0}`")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub randomizer: Randomizer,
    /// Frame tick of the client loop
    pub tick_ms: u32,
    pub swipe_threshold_px: u32,
    /// Logging is off unless this is set
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            randomizer: Randomizer::Uniform,
            tick_ms: TICK_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source. Without a seed, one is taken
    /// from the clock.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed = match get(ENV_SEED) {
            Some(value) => parse_u32(ENV_SEED, &value)?,
            None => clock_seed(),
        };

        let randomizer = match get(ENV_RANDOMIZER) {
            Some(value) => {
                Randomizer::from_str(&value).ok_or(ConfigError::UnknownRandomizer(value))?
            }
            None => Randomizer::default(),
        };

        let tick_ms = match get(ENV_TICK_MS) {
            Some(value) => parse_in_range(ENV_TICK_MS, &value, 1, MAX_TICK_MS)?,
            None => TICK_MS,
        };

        let swipe_threshold_px = match get(ENV_SWIPE_PX) {
            Some(value) => parse_in_range(ENV_SWIPE_PX, &value, 1, u32::MAX)?,
            None => SWIPE_THRESHOLD_PX,
        };

        let log_level = match get(ENV_LOG_LEVEL) {
            Some(value) => value
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::UnknownLogLevel(value))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            seed,
            randomizer,
            tick_ms,
            swipe_threshold_px,
            log_path: get(ENV_LOG_PATH).map(PathBuf::from),
            log_level,
        })
    }

    /// Game parameters for an episode; later episodes shift the seed.
    pub fn game_config(&self, episode: u32) -> GameConfig {
        GameConfig {
            seed: self.seed.wrapping_add(episode),
            randomizer: self.randomizer,
        }
    }
}

fn parse_u32(var: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}

fn parse_in_range(var: &'static str, value: &str, min: u32, max: u32) -> Result<u32, ConfigError> {
    let parsed = parse_u32(var, value)?;
    if parsed < min || parsed > max {
        return Err(ConfigError::OutOfRange {
            var,
            value: parsed,
            min,
            max,
        });
    }
    Ok(parsed)
}

/// Seed from the wall clock (sub-second nanos mixed with seconds)
pub fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}
