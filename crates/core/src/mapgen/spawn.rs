//! Random spawn-point sampling over interior floor cells.

use crate::config::SPAWN_SAMPLE_ATTEMPTS;
use crate::rng::GameRng;
use crate::types::{Point, Pos};

use super::grid::Grid;

/// Rejection-samples interior cells and returns the center of the first floor hit.
///
/// After `SPAWN_SAMPLE_ATTEMPTS` misses this returns the grid's geometric center, which is not
/// checked against the grid and may sit inside a wall.
pub fn find_spawn_point(grid: &Grid, rng: &mut GameRng) -> Point {
    let interior_width = grid.width().saturating_sub(2);
    let interior_height = grid.height().saturating_sub(2);

    if interior_width > 0 && interior_height > 0 {
        for _ in 0..SPAWN_SAMPLE_ATTEMPTS {
            let x = rng.index(interior_width) + 1;
            let y = rng.index(interior_height) + 1;
            let pos = Pos { y: y as i32, x: x as i32 };
            if grid.is_floor(pos) {
                return Point::cell_center(pos);
            }
        }
    }

    log::debug!(
        "spawn sampling missed {SPAWN_SAMPLE_ATTEMPTS} times on {}x{} grid, using center",
        grid.width(),
        grid.height()
    );
    grid.center()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn spawn_lands_on_a_floor_cell_center() {
        let grid = Grid::from_rows(&["#####", "#.#.#", "#####"]).expect("grid");
        let mut rng = GameRng::seed_from_u64(11);
        for _ in 0..50 {
            let point = find_spawn_point(&grid, &mut rng);
            assert!(grid.is_open(point));
            assert_eq!(point.x.fract(), 0.5);
            assert_eq!(point.y.fract(), 0.5);
        }
    }

    #[test]
    fn all_wall_grid_falls_back_to_geometric_center_even_though_it_is_a_wall() {
        let grid = Grid::filled(7, 6, Cell::Wall);
        let mut rng = GameRng::seed_from_u64(2);
        let point = find_spawn_point(&grid, &mut rng);
        assert_eq!(point, Point::new(3.5, 3.0));
        assert!(!grid.is_open(point), "center fallback is not validated against the grid");
    }
}
