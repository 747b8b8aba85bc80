pub mod types;
pub mod state;
pub mod engine;

pub mod entities;
pub mod systems;

pub use engine::Engine;
pub use state::GameState;
pub use types::{Direction, GameStatus, Position};
