//! Engine configuration - immutable board dimensions owned by each engine.

use std::fmt;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_SIDE, MIN_BOARD_SIDE};

/// Configuration errors.
///
/// Gameplay never fails; only building an engine or loading settings can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A board side outside `MIN_BOARD_SIDE..=MAX_BOARD_SIDE`.
    InvalidDimension { name: &'static str, value: u32 },
    /// An environment variable that is set but does not parse.
    InvalidValue { var: &'static str, value: String },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidDimension { .. } => "invalid_dimension",
            ConfigError::InvalidValue { .. } => "invalid_value",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimension { name, value } => write!(
                f,
                "board {} must be within {}..={}, got {}",
                name, MIN_BOARD_SIDE, MAX_BOARD_SIDE, value
            ),
            ConfigError::InvalidValue { var, value } => {
                write!(f, "{} has an invalid value: {:?}", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Board dimensions for one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    width: u8,
    height: u8,
}

impl EngineConfig {
    /// Validate and build a configuration.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            width: check_side("width", width)?,
            height: check_side("height", height)?,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

fn check_side(name: &'static str, value: u32) -> Result<u8, ConfigError> {
    if value < MIN_BOARD_SIDE as u32 || value > MAX_BOARD_SIDE as u32 {
        return Err(ConfigError::InvalidDimension { name, value });
    }
    Ok(value as u8)
}
