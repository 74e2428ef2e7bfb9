//! Corridor lattice used when the automaton cannot produce a connected cave.

use crate::config::{LATTICE_MARGIN, LATTICE_STRIDE};
use crate::types::{Cell, Pos};

use super::grid::Grid;

/// Floor rows and columns every `LATTICE_STRIDE` cells, starting `LATTICE_MARGIN` in from the
/// edge. Every row crosses every column, so the floor is one region.
pub fn corridor_lattice(width: usize, height: usize) -> Grid {
    let mut grid = Grid::filled(width, height, Cell::Wall);
    let x_end = width.saturating_sub(LATTICE_MARGIN);
    let y_end = height.saturating_sub(LATTICE_MARGIN);

    for y in (LATTICE_MARGIN..y_end).step_by(LATTICE_STRIDE) {
        for x in LATTICE_MARGIN..x_end {
            grid.set(Pos { y: y as i32, x: x as i32 }, Cell::Floor);
        }
    }
    for x in (LATTICE_MARGIN..x_end).step_by(LATTICE_STRIDE) {
        for y in LATTICE_MARGIN..y_end {
            grid.set(Pos { y: y as i32, x: x as i32 }, Cell::Floor);
        }
    }
    grid
}
