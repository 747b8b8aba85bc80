use std::fmt;

use crate::game::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroGridSize,
    ZeroTickInterval,
    InitialPositionOutOfBounds { position: Position, grid_size: usize },
    Io { path: String, message: String },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGridSize => write!(f, "grid_size must be at least 1"),
            Self::ZeroTickInterval => write!(f, "tick_interval_ms must be at least 1"),
            Self::InitialPositionOutOfBounds { position, grid_size } => write!(
                f,
                "initial position ({}, {}) is outside a {grid_size}x{grid_size} grid",
                position.x, position.y
            ),
            Self::Io { path, message } => write!(f, "cannot read config file {path}: {message}"),
            Self::Parse(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}
