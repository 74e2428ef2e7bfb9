//! Noise seeding and cellular-automaton smoothing.

use crate::config::WALL_PROBABILITY;
use crate::rng::GameRng;
use crate::types::{Cell, Pos};

use super::grid::Grid;

/// Random interior noise inside a solid border.
pub(super) fn seed_noise(width: usize, height: usize, rng: &mut GameRng) -> Grid {
    let mut grid = Grid::filled(width, height, Cell::Wall);
    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let cell = if rng.chance(WALL_PROBABILITY) { Cell::Wall } else { Cell::Floor };
            grid.set(Pos { y: y as i32, x: x as i32 }, cell);
        }
    }
    grid
}

/// One smoothing pass: more than four wall neighbours makes a wall, fewer than four makes floor,
/// exactly four keeps the cell. Reads from `grid`, writes into a copy.
pub fn smooth(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    for y in 1..grid.height().saturating_sub(1) {
        for x in 1..grid.width().saturating_sub(1) {
            let pos = Pos { y: y as i32, x: x as i32 };
            match wall_neighbours(grid, pos) {
                count if count > 4 => next.set(pos, Cell::Wall),
                count if count < 4 => next.set(pos, Cell::Floor),
                _ => {}
            }
        }
    }
    next
}

pub fn wall_neighbours(grid: &Grid, pos: Pos) -> usize {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if grid.cell_at(Pos { y: pos.y + dy, x: pos.x + dx }) == Cell::Wall {
                count += 1;
            }
        }
    }
    count
}
