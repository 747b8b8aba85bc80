//! Food entity logic.
//!
//! Food is dropped on a uniformly random cell of the whole grid. The snake body is
//! not excluded, so food can land under a segment and stay unreachable until the
//! body moves off that cell.

use rand::Rng;

use crate::game::types::Position;

/// Pick a random cell on a `grid_size` x `grid_size` grid.
pub fn place_food<R: Rng + ?Sized>(grid_size: usize, rng: &mut R) -> Position {
    Position {
        x: rng.random_range(0..grid_size),
        y: rng.random_range(0..grid_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn food_stays_on_the_grid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            assert!(place_food(7, &mut rng).in_bounds(7));
        }
    }

    #[test]
    fn single_cell_grid_always_yields_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(place_food(1, &mut rng), Position::new(0, 0));
    }

    #[test]
    fn every_cell_is_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [[false; 4]; 4];
        for _ in 0..2_000 {
            let pos = place_food(4, &mut rng);
            seen[pos.y][pos.x] = true;
        }
        assert!(seen.iter().flatten().all(|&hit| hit));
    }
}
