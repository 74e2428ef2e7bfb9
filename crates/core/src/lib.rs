pub mod config;
pub mod entities;
pub mod game;
pub mod mapgen;
pub mod progression;
pub mod raycast;
pub mod render;
pub mod rng;
pub mod sprites;
pub mod types;

pub use game::{Action, EntityRef, Game, GameState, HudSnapshot, InputState, TickReport};
pub use mapgen::{GeneratedMap, Grid, GridError, MapGenerator};
pub use render::{FrameOptions, Rgba, Surface, TextAlign, compose_frame};
pub use rng::GameRng;
pub use types::*;
