//! Game configuration constants and the runtime `GameConfig`.
//!
//! The constants are the stock values: a 20x20 grid, one tick every 200 ms, and a
//! single-segment snake at (2, 2) heading right. `GameConfig::load` overlays an
//! optional JSON file and environment variables on top of them.

use std::{env, fs, time::Duration};

use log::{info, warn};
use serde::{Serialize, Deserialize};

use super::error::ConfigError;
use crate::game::types::{Direction, Position};

/// Side length of the square grid.
pub const GRID_SIZE: usize = 20;

/// Interval between two ticks, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 200;

/// Cell of the single segment every fresh game starts with.
pub const INITIAL_POSITION: Position = Position { x: 2, y: 2 };

/// Heading of every fresh game.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Path of an optional JSON config file.
pub const CONFIG_PATH_ENV: &str = "SNAKE_CONFIG";
pub const GRID_SIZE_ENV: &str = "SNAKE_GRID_SIZE";
pub const TICK_INTERVAL_ENV: &str = "SNAKE_TICK_INTERVAL_MS";
pub const SEED_ENV: &str = "SNAKE_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: usize,
    pub tick_interval_ms: u64,
    pub initial_position: Position,
    pub initial_direction: Direction,
    /// Seed for the food RNG. `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            initial_position: INITIAL_POSITION,
            initial_direction: INITIAL_DIRECTION,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults, then the file named by `SNAKE_CONFIG`, then env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| env::var(name).ok())
    }

    /// `load` with variables taken from `lookup`. Validation runs once, on the
    /// merged result.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => {
                info!("[Config] Loading config file {}", path);
                Self::parse_json(&read_file(&path)?)?
            }
            None => Self::default(),
        };

        if let Some(grid_size) = parse_var::<_, usize>(&lookup, GRID_SIZE_ENV) {
            config.grid_size = grid_size;
        }
        if let Some(tick_interval_ms) = parse_var::<_, u64>(&lookup, TICK_INTERVAL_ENV) {
            config.tick_interval_ms = tick_interval_ms;
        }
        if let Some(seed) = parse_var::<_, u64>(&lookup, SEED_ENV) {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::from_json(&read_file(path)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config = Self::parse_json(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if !self.initial_position.in_bounds(self.grid_size) {
            return Err(ConfigError::InitialPositionOutOfBounds {
                position: self.initial_position,
                grid_size: self.grid_size,
            });
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

fn read_file(path: &str) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|err| ConfigError::Io {
        path: path.to_string(),
        message: err.to_string(),
    })
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let value = lookup(name)?;
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("[Config] Ignoring {}={:?}: not an unsigned integer", name, value);
            None
        }
    }
}
