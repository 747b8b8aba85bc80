//! Game state engine.
//!
//! Sole owner of the simulation state. Collaborators drive it through `start`,
//! `restart`, `request_direction` and `tick`, and read it back through `state`.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{ConfigError, GameConfig};
use crate::game::state::GameState;
use crate::game::types::{Direction, GameStatus};
use crate::game::systems::{apply_tick, request_direction};

pub struct Engine {
    config: GameConfig,
    state: GameState,
    /// Heading applied at the next tick. Last accepted request wins.
    pending: Direction,
    rng: StdRng,
}

impl Engine {
    /// Engine in the `NotStarted` state, seeded from `config.seed` when present.
    /// Rejects configs that fail `GameConfig::validate`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config, &mut rng);
        Ok(Engine {
            pending: state.direction,
            config,
            state,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset to the canonical initial state and mark it running.
    pub fn start(&mut self) -> GameState {
        self.reset();
        info!(
            "[Engine] Game started: grid={}x{} head=({}, {}) food=({}, {})",
            self.config.grid_size,
            self.config.grid_size,
            self.state.snake.head().x,
            self.state.snake.head().y,
            self.state.food.x,
            self.state.food.y
        );
        self.state.clone()
    }

    /// Same reset as `start`, valid from any status.
    pub fn restart(&mut self) -> GameState {
        let previous = self.state.status;
        self.reset();
        info!("[Engine] Game restarted from {:?}", previous);
        self.state.clone()
    }

    /// Buffer a heading for the next tick. A reversal of the current heading is ignored.
    pub fn request_direction(&mut self, requested: Direction) {
        let accepted = request_direction(self.state.direction, requested);
        if accepted != requested {
            debug!("[Engine] Rejected reversal {:?} while heading {:?}", requested, self.state.direction);
            return;
        }
        self.pending = accepted;
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Advance by exactly one step. No-op unless running.
    pub fn tick(&mut self) -> GameState {
        if self.state.status != GameStatus::Running {
            return self.state.clone();
        }

        self.state.direction = self.pending;
        apply_tick(&mut self.state, &mut self.rng);

        let head = self.state.snake.head();
        debug!(
            "[Engine] Tick: head=({}, {}) heading={:?} length={}",
            head.x, head.y, self.state.direction, self.state.snake.len()
        );
        if self.state.is_over() {
            info!("[Engine] Game over: final length={}", self.state.snake.len());
        }
        self.state.clone()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn reset(&mut self) {
        let mut state = GameState::new(&self.config, &mut self.rng);
        state.status = GameStatus::Running;
        self.pending = state.direction;
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Position;

    fn seeded(seed: u64) -> Engine {
        Engine::new(GameConfig { seed: Some(seed), ..GameConfig::default() }).unwrap()
    }

    #[test]
    fn invalid_configs_are_rejected_before_any_state_exists() {
        let zero_grid = GameConfig { grid_size: 0, seed: Some(1), ..GameConfig::default() };
        assert!(matches!(Engine::new(zero_grid), Err(ConfigError::ZeroGridSize)));

        // Default origin (2, 2) does not fit on a 2x2 grid.
        let small_grid = GameConfig { grid_size: 2, seed: Some(1), ..GameConfig::default() };
        assert!(matches!(
            Engine::new(small_grid),
            Err(ConfigError::InitialPositionOutOfBounds { grid_size: 2, .. })
        ));

        let zero_tick = GameConfig { tick_interval_ms: 0, ..GameConfig::default() };
        let rng = StdRng::seed_from_u64(1);
        assert!(matches!(Engine::with_rng(zero_tick, rng), Err(ConfigError::ZeroTickInterval)));
    }

    #[test]
    fn fresh_engine_waits_for_start() {
        let mut engine = seeded(1);
        assert_eq!(engine.state().status, GameStatus::NotStarted);
        let before = engine.state().clone();
        assert_eq!(engine.tick(), before);
    }

    #[test]
    fn start_yields_the_canonical_state() {
        let mut engine = seeded(2);
        let state = engine.start();
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(2, 2));
        assert_eq!(state.direction, Direction::Right);
        assert!(state.food.in_bounds(20));
    }

    #[test]
    fn pending_direction_applies_only_on_tick() {
        let mut engine = seeded(3);
        engine.start();
        engine.request_direction(Direction::Down);
        assert_eq!(engine.state().direction, Direction::Right);
        assert_eq!(engine.pending_direction(), Direction::Down);
        let state = engine.tick();
        assert_eq!(state.direction, Direction::Down);
    }

    #[test]
    fn last_request_before_a_tick_wins() {
        let mut engine = seeded(4);
        engine.start();
        engine.request_direction(Direction::Up);
        engine.request_direction(Direction::Down);
        assert_eq!(engine.tick().direction, Direction::Down);
    }

    #[test]
    fn reversal_of_the_applied_heading_is_dropped() {
        let mut engine = seeded(5);
        engine.start();
        engine.request_direction(Direction::Up);
        // Still heading right until the next tick, so left is a reversal.
        engine.request_direction(Direction::Left);
        assert_eq!(engine.pending_direction(), Direction::Up);
    }

    #[test]
    fn seeded_engines_replay_identically() {
        let mut a = seeded(99);
        let mut b = seeded(99);
        a.start();
        b.start();
        for turn in [Direction::Down, Direction::Left, Direction::Up, Direction::Right] {
            for _ in 0..5 {
                a.request_direction(turn);
                b.request_direction(turn);
                assert_eq!(a.tick(), b.tick());
            }
        }
    }

    #[test]
    fn restart_recovers_from_any_status() {
        let mut engine = seeded(6);
        let fresh = engine.restart();
        assert_eq!(fresh.status, GameStatus::Running);
        engine.request_direction(Direction::Down);
        engine.tick();
        let again = engine.restart();
        assert_eq!(again.snake.head(), Position::new(2, 2));
        assert_eq!(again.snake.len(), 1);
        assert_eq!(engine.pending_direction(), Direction::Right);
    }
}
