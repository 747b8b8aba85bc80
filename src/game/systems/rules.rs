//! Tick resolution: movement, self-collision, growth and food respawn.

use log::debug;
use rand::Rng;

use crate::game::types::GameStatus;
use crate::game::state::GameState;
use crate::game::entities::place_food;
use crate::game::systems::movement::next_head;

/// Advance `state` by one tick. Anything but a running game comes back unchanged.
pub fn step<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    let mut next = state.clone();
    apply_tick(&mut next, rng);
    next
}

/// In-place form of [`step`].
pub fn apply_tick<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    if state.status != GameStatus::Running {
        return;
    }

    let new_head = next_head(state.snake.head(), state.direction, state.grid_size);

    // Checked against the whole pre-move body, tail included.
    if state.snake.occupies(new_head) {
        state.status = GameStatus::Over;
        return;
    }

    state.snake.push_head(new_head);

    if new_head == state.food {
        state.food = place_food(state.grid_size, rng);
        debug!(
            "[Rules] Food eaten at ({}, {}), length={}, new food at ({}, {})",
            new_head.x, new_head.y, state.snake.len(), state.food.x, state.food.y
        );
    } else {
        state.snake.drop_tail();
    }
}
