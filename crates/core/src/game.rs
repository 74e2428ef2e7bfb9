//! Run controller: owns the level state and advances it one fixed step at a time.
//! Hosts feed it sampled input and read back events, status, and snapshots for drawing.

mod bootstrap;
pub mod combat;
mod hash;
mod input;
mod state;
mod tick;

#[cfg(test)]
pub(crate) mod test_support;

pub use input::{Action, InputState};
pub use state::{EntityRef, GameState, HudSnapshot};

use crate::entities::{Damageable, Interactable, Player, PurchaseError};
use crate::progression::STARTING_LEVEL;
use crate::rng::GameRng;
use crate::sprites::WorldSprite;
use crate::types::*;

/// Everything one call to [`Game::tick`] produced.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub events: Vec<GameEvent>,
    pub status: RunStatus,
}

pub struct Game {
    seed: u64,
    rng: GameRng,
    tick: u64,
    elapsed_ms: f64,
    status: RunStatus,
    state: GameState,
    // Edge detection for actions that fire once per press.
    interact_held: bool,
    cycle_held: bool,
    // Events raised outside a tick, delivered with the next report.
    pending: Vec<GameEvent>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::starting_at(seed, STARTING_LEVEL)
    }

    /// New run that begins on `level` with a fresh player.
    pub fn starting_at(seed: u64, level: u32) -> Self {
        let mut rng = GameRng::seed_from_u64(seed);
        let state = bootstrap::build_level(level, &mut rng, None);
        let mut game = Self {
            seed,
            rng,
            tick: 0,
            elapsed_ms: 0.0,
            status: RunStatus::Playing,
            state,
            interact_held: false,
            cycle_held: false,
            pending: Vec::new(),
        };
        game.pending.push(game.level_started_event());
        game
    }

    /// Builds `level` and carries the current player's health, coins, and arsenal into it.
    pub fn start_level(&mut self, level: u32) {
        let carried = self.state.player.clone();
        self.state = bootstrap::build_level(level, &mut self.rng, Some(carried));
        self.status = RunStatus::Playing;
        let event = self.level_started_event();
        self.pending.push(event);
    }

    /// Starts over from the first level with a fresh player. The random stream keeps going, so
    /// the new run gets a new map.
    pub fn restart(&mut self) {
        log::info!("restarting run (seed {})", self.seed);
        self.state = bootstrap::build_level(STARTING_LEVEL, &mut self.rng, None);
        self.status = RunStatus::Playing;
        let event = self.level_started_event();
        self.pending.push(event);
    }

    /// Buys `kind` from the shop the player is standing next to.
    pub fn buy_weapon(&mut self, kind: WeaponKind) -> Result<(), PurchaseError> {
        let GameState { player, shop, .. } = &mut self.state;
        if !shop.is_within_reach(player.position) {
            return Err(PurchaseError::NotNearShop);
        }
        let item = shop.item(kind).ok_or(PurchaseError::UnknownWeapon { name: kind.name() })?;
        player.buy_weapon(item)?;
        log::info!("bought {} ({} coins left)", kind.name(), player.coins());
        self.pending.push(GameEvent::WeaponPurchased { weapon: kind });
        Ok(())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Simulated milliseconds since the run began.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.state.player
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn near_shop(&self) -> bool {
        self.state.shop.is_within_reach(self.state.player.position)
    }

    pub fn near_active_portal(&self) -> bool {
        self.state.portal.is_active() && self.state.portal.is_within_reach(self.state.player.position)
    }

    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        self.state.entities()
    }

    pub fn world_sprites(&self) -> Vec<WorldSprite> {
        self.entities().filter_map(|entity| entity.sprite()).collect()
    }

    pub fn hud(&self) -> HudSnapshot {
        let player = &self.state.player;
        HudSnapshot {
            level: self.state.level,
            health: player.health(),
            max_health: player.max_health(),
            coins: player.coins(),
            weapon: player.weapon().kind(),
            enemies_remaining: self.state.live_enemy_count(),
            enemies_killed: self.state.killed_enemy_count(),
            near_shop: self.near_shop(),
            near_active_portal: self.near_active_portal(),
            status: self.status,
        }
    }

    fn level_started_event(&self) -> GameEvent {
        GameEvent::LevelStarted {
            level: self.state.level,
            enemies: self.state.enemies.len(),
            fallback_map: self.state.used_fallback_map,
        }
    }
}
