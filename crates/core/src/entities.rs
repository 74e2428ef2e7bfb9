//! World entities and the capability traits the renderer and controller use to treat them
//! uniformly.

mod coin;
mod enemy;
mod player;
mod portal;
mod shop;
mod weapon;

pub use coin::CoinDrop;
pub use enemy::{Enemy, EnemyIntent};
pub use player::{PLAYER_MAX_HEALTH, Player, PurchaseError};
pub use portal::ExitPortal;
pub use shop::Shop;
pub use weapon::Weapon;

use crate::types::Point;

pub trait Positioned {
    fn position(&self) -> Point;

    fn distance_to(&self, point: Point) -> f64 {
        self.position().distance_to(point)
    }
}

pub trait Damageable {
    fn health(&self) -> u32;
    fn max_health(&self) -> u32;

    /// Subtracts `amount`, saturating at zero.
    fn take_damage(&mut self, amount: u32);

    fn is_dead(&self) -> bool {
        self.health() == 0
    }

    fn health_fraction(&self) -> f64 {
        if self.max_health() == 0 {
            return 0.0;
        }
        f64::from(self.health()) / f64::from(self.max_health())
    }
}

pub trait Interactable: Positioned {
    fn interaction_radius(&self) -> f64;

    fn is_within_reach(&self, point: Point) -> bool {
        self.distance_to(point) < self.interaction_radius()
    }
}
