//! Snake movement system.
//!
//! This module handles heading changes and moving the head across the toroidal grid.

use crate::game::types::{Direction, Position};

/// Direction gate: a request that would turn the head straight back into the
/// segment behind it is dropped and `current` is kept.
pub fn request_direction(current: Direction, requested: Direction) -> Direction {
    if requested == current.opposite() {
        current
    } else {
        requested
    }
}

/// Cell reached from `pos` by one move in `direction`, wrapping per axis.
/// `pos` must already be on the grid.
pub fn next_head(pos: Position, direction: Direction, grid_size: usize) -> Position {
    let (dx, dy) = direction.delta();
    Position {
        x: wrap_axis(pos.x as i64 + dx, grid_size),
        y: wrap_axis(pos.y as i64 + dy, grid_size),
    }
}

fn wrap_axis(raw: i64, grid_size: usize) -> usize {
    if raw >= grid_size as i64 {
        0
    } else if raw < 0 {
        grid_size - 1
    } else {
        raw as usize
    }
}
