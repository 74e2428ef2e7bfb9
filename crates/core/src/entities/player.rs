use thiserror::Error;

use crate::mapgen::Grid;
use crate::types::{Point, WeaponKind};

use super::weapon::Weapon;
use super::{Damageable, Positioned};

pub const PLAYER_MAX_HEALTH: u32 = 100;
const PLAYER_SPEED: f64 = 0.08;
const PLAYER_ROTATION_SPEED: f64 = 0.06;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("{name} costs {cost} coins but only {balance} are available")]
    InsufficientCoins { name: &'static str, cost: u32, balance: u32 },
    #[error("{name} is already owned")]
    AlreadyOwned { name: &'static str },
    #[error("{name} is not sold here")]
    UnknownWeapon { name: &'static str },
    #[error("no shop within reach")]
    NotNearShop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Point,
    pub angle: f64,
    pub speed: f64,
    pub rotation_speed: f64,
    health: u32,
    max_health: u32,
    coins: u32,
    weapons: Vec<Weapon>,
    equipped: usize,
}

impl Player {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            angle: 0.0,
            speed: PLAYER_SPEED,
            rotation_speed: PLAYER_ROTATION_SPEED,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            coins: 0,
            weapons: vec![Weapon::new(WeaponKind::Pistol)],
            equipped: 0,
        }
    }

    /// Moves to a new level's spawn, keeping health, coins, and arsenal.
    pub fn respawn_at(&mut self, position: Point) {
        self.position = position;
        self.angle = 0.0;
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn add_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn equipped_index(&self) -> usize {
        self.equipped
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapons[self.equipped]
    }

    pub fn weapon_mut(&mut self) -> &mut Weapon {
        &mut self.weapons[self.equipped]
    }

    pub fn owns(&self, kind: WeaponKind) -> bool {
        self.weapons.iter().any(|weapon| weapon.kind() == kind)
    }

    pub fn select_weapon(&mut self, index: usize) -> bool {
        if index >= self.weapons.len() {
            return false;
        }
        self.equipped = index;
        true
    }

    pub fn cycle_weapon(&mut self) {
        self.equipped = (self.equipped + 1) % self.weapons.len();
    }

    /// Pays for and equips `weapon`. The arsenal only grows and never holds two of a kind.
    pub fn buy_weapon(&mut self, weapon: &Weapon) -> Result<(), PurchaseError> {
        if self.owns(weapon.kind()) {
            return Err(PurchaseError::AlreadyOwned { name: weapon.name() });
        }
        if self.coins < weapon.cost() {
            return Err(PurchaseError::InsufficientCoins {
                name: weapon.name(),
                cost: weapon.cost(),
                balance: self.coins,
            });
        }
        self.coins -= weapon.cost();
        self.weapons.push(Weapon::new(weapon.kind()));
        self.equipped = self.weapons.len() - 1;
        Ok(())
    }

    /// Steps `direction` (+1 forward, -1 back) times the speed along the facing angle.
    /// The step is rejected when it would end inside a non-floor cell.
    pub fn try_move(&mut self, grid: &Grid, direction: f64) -> bool {
        let target = self.position.offset(self.angle, self.speed * direction);
        if !grid.is_open(target) {
            return false;
        }
        self.position = target;
        true
    }

    /// Turns `direction` (+1 clockwise on screen, -1 counter-clockwise) times the rotation speed.
    pub fn rotate(&mut self, direction: f64) {
        self.angle += self.rotation_speed * direction;
    }
}

impl Positioned for Player {
    fn position(&self) -> Point {
        self.position
    }
}

impl Damageable for Player {
    fn health(&self) -> u32 {
        self.health
    }

    fn max_health(&self) -> u32 {
        self.max_health
    }

    fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}
