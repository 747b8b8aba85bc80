use serde::{Serialize, Deserialize};
use rand::Rng;

use crate::config::GameConfig;
use crate::game::types::{Direction, GameStatus, Position};
use crate::game::entities::{Snake, place_food};

/// Full simulation state. Snapshots of it are what collaborators read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid_size: usize,
    pub snake: Snake,
    pub direction: Direction,
    pub food: Position,
    pub status: GameStatus,
}

impl GameState {
    /// Canonical initial state: single segment at the configured origin, default
    /// heading, fresh food, not started yet.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        GameState {
            grid_size: config.grid_size,
            snake: Snake::new(config.initial_position),
            direction: config.initial_direction,
            food: place_food(config.grid_size, rng),
            status: GameStatus::NotStarted,
        }
    }

    /// Assemble a state from explicit parts.
    pub fn from_parts(
        grid_size: usize,
        snake: Snake,
        direction: Direction,
        food: Position,
        status: GameStatus,
    ) -> Self {
        GameState { grid_size, snake, direction, food, status }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }
}
