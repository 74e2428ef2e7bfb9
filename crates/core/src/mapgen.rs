//! Procedural cave generation split into coherent submodules.

pub mod automaton;
pub mod connectivity;
pub mod fallback;
pub mod grid;
pub mod model;
pub mod spawn;

use crate::config::{MAX_GENERATION_ATTEMPTS, SMOOTHING_PASSES};
use crate::rng::GameRng;

pub use fallback::corridor_lattice;
pub use grid::{Grid, GridError};
pub use model::GeneratedMap;
pub use spawn::find_spawn_point;

const MIN_SIDE: usize = 3;

pub struct MapGenerator {
    width: usize,
    height: usize,
}

impl MapGenerator {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width: width.max(MIN_SIDE), height: height.max(MIN_SIDE) }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Noise, smoothing, border sealing, and a connectivity check, retried up to
    /// `MAX_GENERATION_ATTEMPTS` times before substituting the corridor lattice.
    pub fn generate(&self, rng: &mut GameRng) -> GeneratedMap {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let grid = self.cave_candidate(rng);
            if connectivity::is_connected(&grid) {
                log::debug!("accepted {}x{} cave on attempt {attempt}", self.width, self.height);
                return GeneratedMap { grid, attempts: attempt, used_fallback: false };
            }
        }

        log::warn!(
            "no connected {}x{} cave after {MAX_GENERATION_ATTEMPTS} attempts, using corridor lattice",
            self.width,
            self.height
        );
        GeneratedMap {
            grid: corridor_lattice(self.width, self.height),
            attempts: MAX_GENERATION_ATTEMPTS,
            used_fallback: true,
        }
    }

    fn cave_candidate(&self, rng: &mut GameRng) -> Grid {
        let mut grid = automaton::seed_noise(self.width, self.height, rng);
        for _ in 0..SMOOTHING_PASSES {
            grid = automaton::smooth(&grid);
        }
        grid.seal_border();
        grid
    }
}

pub fn generate_map(width: usize, height: usize, seed: u64) -> GeneratedMap {
    MapGenerator::new(width, height).generate(&mut GameRng::seed_from_u64(seed))
}
