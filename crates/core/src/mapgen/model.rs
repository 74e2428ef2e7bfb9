//! Output of one map generation run.

use super::grid::Grid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMap {
    pub grid: Grid,
    /// Automaton attempts consumed, including the accepted one.
    pub attempts: u32,
    pub used_fallback: bool,
}

impl GeneratedMap {
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
