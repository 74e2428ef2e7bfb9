//! Simulation tunables shared by the controller, renderer, and generator.

use std::f64::consts::PI;

pub const TICK_RATE_HZ: u32 = 60;
/// Simulated milliseconds per tick.
pub const TICK_MS: f64 = 1000.0 / TICK_RATE_HZ as f64;

pub const FIELD_OF_VIEW: f64 = PI / 3.0;
pub const MAX_RAYS: u32 = 800;
/// Extra angle beyond half the FOV within which sprites still project.
pub const SPRITE_FOV_MARGIN: f64 = 0.5;
/// Sprites closer than this are sized as if they were this far away.
pub const MIN_SPRITE_DISTANCE: f64 = 0.25;

pub const SHOT_CONE_HALF_ANGLE: f64 = 0.3;
pub const COIN_PICKUP_RADIUS: f64 = 0.5;

pub const WALL_PROBABILITY: f64 = 0.45;
pub const SMOOTHING_PASSES: usize = 4;
pub const CONNECTIVITY_THRESHOLD: f64 = 0.95;
pub const MAX_GENERATION_ATTEMPTS: u32 = 50;
pub const SPAWN_SAMPLE_ATTEMPTS: u32 = 100;
pub const LATTICE_MARGIN: usize = 2;
pub const LATTICE_STRIDE: usize = 3;
