//! Flood-fill connectivity measurement.

use std::collections::VecDeque;

use crate::config::CONNECTIVITY_THRESHOLD;
use crate::types::Pos;

use super::grid::Grid;

const NEIGHBOURS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// First interior floor cell in row-major order.
pub fn first_floor_cell(grid: &Grid) -> Option<Pos> {
    grid.positions().find(|&pos| !grid.is_border(pos) && grid.is_floor(pos))
}

/// Number of floor cells 4-connected to `start`, including `start` itself.
pub fn reachable_floor_count(grid: &Grid, start: Pos) -> usize {
    if !grid.is_floor(start) {
        return 0;
    }

    let mut visited = vec![false; grid.width() * grid.height()];
    let index = |pos: Pos| (pos.y as usize) * grid.width() + (pos.x as usize);
    visited[index(start)] = true;
    let mut open = VecDeque::from([start]);
    let mut reached = 0;

    while let Some(pos) = open.pop_front() {
        reached += 1;
        for (dx, dy) in NEIGHBOURS {
            let next = Pos { y: pos.y + dy, x: pos.x + dx };
            if !grid.is_floor(next) || visited[index(next)] {
                continue;
            }
            visited[index(next)] = true;
            open.push_back(next);
        }
    }

    reached
}

/// Share of all floor cells reachable from the first interior floor cell.
/// `None` when the grid has no interior floor.
pub fn connectivity_ratio(grid: &Grid) -> Option<f64> {
    let start = first_floor_cell(grid)?;
    let total = grid.floor_count();
    Some(reachable_floor_count(grid, start) as f64 / total as f64)
}

pub fn is_connected(grid: &Grid) -> bool {
    connectivity_ratio(grid).is_some_and(|ratio| ratio >= CONNECTIVITY_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_without_floor_is_not_connected() {
        let grid = Grid::from_rows(&["####", "####", "####"]).expect("grid");
        assert_eq!(connectivity_ratio(&grid), None);
        assert!(!is_connected(&grid));
    }

    #[test]
    fn two_equal_rooms_fail_the_threshold() {
        let grid = Grid::from_rows(&["#######", "#..#..#", "#..#..#", "#######"]).expect("grid");
        assert_eq!(reachable_floor_count(&grid, Pos { y: 1, x: 1 }), 4);
        assert_eq!(connectivity_ratio(&grid), Some(0.5));
        assert!(!is_connected(&grid));
    }

    #[test]
    fn a_small_isolated_pocket_is_tolerated() {
        let mut rows = vec!["#".repeat(24)];
        for _ in 0..3 {
            rows.push(format!("#{}#", ".".repeat(22)));
        }
        rows.push(format!("#{}#", "#".repeat(22)));
        rows.push(format!("#.{}#", "#".repeat(21)));
        rows.push("#".repeat(24));

        let grid = Grid::from_rows(&rows).expect("grid");
        let ratio = connectivity_ratio(&grid).expect("has floor");
        assert!(ratio < 1.0);
        assert!(is_connected(&grid), "66 of 67 floor cells reachable should pass, got {ratio}");
    }

    #[test]
    fn diagonal_contact_does_not_connect() {
        let grid = Grid::from_rows(&["####", "#.##", "##.#", "####"]).expect("grid");
        assert_eq!(reachable_floor_count(&grid, Pos { y: 1, x: 1 }), 1);
        assert!(!is_connected(&grid));
    }
}
