use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EnemyId;
}

/// A single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Floor,
}

impl Cell {
    pub fn is_floor(self) -> bool {
        self == Cell::Floor
    }
}

/// Integer cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

/// Continuous world position measured in grid-cell units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Point `distance` units away along `angle`.
    pub fn offset(self, angle: f64, distance: f64) -> Point {
        Point { x: self.x + angle.cos() * distance, y: self.y + angle.sin() * distance }
    }

    /// Grid cell containing this point.
    pub fn cell(self) -> Pos {
        Pos { y: self.y.floor() as i32, x: self.x.floor() as i32 }
    }

    /// Center of the given cell.
    pub fn cell_center(pos: Pos) -> Point {
        Point { x: pos.x as f64 + 0.5, y: pos.y as f64 + 0.5 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Basic,
    Fast,
    Tank,
}

impl EnemyKind {
    pub fn label(self) -> &'static str {
        match self {
            EnemyKind::Basic => "basic",
            EnemyKind::Fast => "fast",
            EnemyKind::Tank => "tank",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Pistol,
    Shotgun,
    Rifle,
    Sniper,
}

/// Lifecycle of the current run as seen by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Playing,
    LevelTransition { next_level: u32 },
    GameOver,
}

/// Notable things that happened during a tick, in the order they happened.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    LevelStarted { level: u32, enemies: usize, fallback_map: bool },
    ShotFired { weapon: WeaponKind },
    EnemyHit { enemy: EnemyId, damage: u32 },
    EnemyKilled { enemy: EnemyId, coins: u32 },
    PlayerDamaged { enemy: EnemyId, amount: u32 },
    CoinCollected { amount: u32 },
    PortalActivated,
    ShopOpened,
    WeaponPurchased { weapon: WeaponKind },
    LevelExited { level: u32 },
    PlayerDied,
}

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}
