//! Session configuration, loaded from environment variables.

use std::env;

use crate::core::{ConfigError, EngineConfig};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_TICK_MS};

/// Default undo depth
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u32,
    pub tick_ms: u32,
    pub board_width: u32,
    pub board_height: u32,
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: DEFAULT_TICK_MS,
            board_width: BOARD_WIDTH as u32,
            board_height: BOARD_HEIGHT as u32,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `TETRIS_SEED`: initial random seed (default: 1)
    /// - `TETRIS_TICK_MS`: gravity cadence in ms (default: 1000)
    /// - `TETRIS_BOARD_WIDTH` / `TETRIS_BOARD_HEIGHT`: board size (default: 10x20)
    /// - `TETRIS_HISTORY`: undo depth (default: 64)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`SessionConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            seed: parse_var(&lookup, "TETRIS_SEED")?.unwrap_or(defaults.seed),
            tick_ms: parse_var(&lookup, "TETRIS_TICK_MS")?.unwrap_or(defaults.tick_ms),
            board_width: parse_var(&lookup, "TETRIS_BOARD_WIDTH")?
                .unwrap_or(defaults.board_width),
            board_height: parse_var(&lookup, "TETRIS_BOARD_HEIGHT")?
                .unwrap_or(defaults.board_height),
            history_limit: parse_var(&lookup, "TETRIS_HISTORY")?
                .unwrap_or(defaults.history_limit),
        };

        if config.tick_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "TETRIS_TICK_MS",
                value: "0".to_string(),
            });
        }
        config.engine_config()?;
        Ok(config)
    }

    /// Validated board dimensions
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        EngineConfig::new(self.board_width, self.board_height)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue { var, value: raw })
}
