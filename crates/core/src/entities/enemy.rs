use crate::mapgen::Grid;
use crate::rng::GameRng;
use crate::types::{EnemyKind, Point};

use super::player::Player;
use super::{Damageable, Positioned};

const DETECTION_RADIUS: f64 = 8.0;
const ATTACK_RADIUS: f64 = 1.5;
const ATTACK_COOLDOWN_MS: f64 = 1000.0;

struct EnemyProfile {
    speed: f64,
    health: u32,
    damage: u32,
    coins: (u32, u32),
}

const fn profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Basic => EnemyProfile { speed: 0.02, health: 50, damage: 10, coins: (8, 15) },
        EnemyKind::Fast => EnemyProfile { speed: 0.03, health: 30, damage: 10, coins: (5, 10) },
        EnemyKind::Tank => EnemyProfile { speed: 0.02, health: 75, damage: 15, coins: (15, 25) },
    }
}

impl EnemyKind {
    /// Weighted spawn table: basic enemies are twice as common as the others.
    pub const SPAWN_TABLE: [EnemyKind; 4] =
        [EnemyKind::Basic, EnemyKind::Basic, EnemyKind::Fast, EnemyKind::Tank];

    pub fn base_health(self) -> u32 {
        profile(self).health
    }

    /// Inclusive coin drop range.
    pub fn coin_range(self) -> (u32, u32) {
        profile(self).coins
    }
}

/// What an enemy does this tick, derived from live distance alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyIntent {
    Idle,
    Pursuing,
    Attacking,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub position: Point,
    pub angle: f64,
    pub speed: f64,
    pub damage: u32,
    pub detection_radius: f64,
    pub attack_radius: f64,
    pub attack_cooldown_ms: f64,
    health: u32,
    max_health: u32,
    last_attack_ms: Option<f64>,
}

impl Enemy {
    pub fn new(kind: EnemyKind, position: Point, angle: f64) -> Self {
        let profile = profile(kind);
        Self {
            kind,
            position,
            angle,
            speed: profile.speed,
            damage: profile.damage,
            detection_radius: DETECTION_RADIUS,
            attack_radius: ATTACK_RADIUS,
            attack_cooldown_ms: ATTACK_COOLDOWN_MS,
            health: profile.health,
            max_health: profile.health,
            last_attack_ms: None,
        }
    }

    /// Replaces max health and refills to it.
    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self.health = max_health;
        self
    }

    pub fn last_attack_ms(&self) -> Option<f64> {
        self.last_attack_ms
    }

    pub fn intent(&self, target: Point) -> EnemyIntent {
        let distance = self.distance_to(target);
        if distance >= self.detection_radius {
            EnemyIntent::Idle
        } else if distance > self.attack_radius {
            EnemyIntent::Pursuing
        } else {
            EnemyIntent::Attacking
        }
    }

    fn attack_ready(&self, now_ms: f64) -> bool {
        self.last_attack_ms.is_none_or(|last| now_ms - last >= self.attack_cooldown_ms)
    }

    /// Faces and chases the player when detected and strikes when in reach and off cooldown.
    /// Returns the damage dealt to the player this tick, if any.
    pub fn update(&mut self, player: &mut Player, grid: &Grid, now_ms: f64) -> Option<u32> {
        match self.intent(player.position) {
            EnemyIntent::Idle => None,
            EnemyIntent::Pursuing => {
                self.angle = self.position.angle_to(player.position);
                let target = self.position.offset(self.angle, self.speed);
                if grid.is_open(target) {
                    self.position = target;
                }
                None
            }
            EnemyIntent::Attacking => {
                self.angle = self.position.angle_to(player.position);
                if !self.attack_ready(now_ms) {
                    return None;
                }
                player.take_damage(self.damage);
                self.last_attack_ms = Some(now_ms);
                Some(self.damage)
            }
        }
    }

    pub fn roll_coin_drop(&self, rng: &mut GameRng) -> u32 {
        let (min, max) = self.kind.coin_range();
        rng.range_inclusive(min, max)
    }
}

impl Positioned for Enemy {
    fn position(&self) -> Point {
        self.position
    }
}

impl Damageable for Enemy {
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
