//! Authoritative per-level world state and the read-only views hosts draw from.

use std::iter;

use slotmap::SlotMap;

use crate::entities::{CoinDrop, Damageable, Enemy, ExitPortal, Player, Positioned, Shop};
use crate::mapgen::Grid;
use crate::sprites::{SpriteKind, WorldSprite};
use crate::types::*;

#[derive(Clone, Debug)]
pub struct GameState {
    pub level: u32,
    pub grid: Grid,
    pub player: Player,
    /// Every enemy spawned on this level. Dead ones stay so their ids keep resolving.
    pub enemies: SlotMap<EnemyId, Enemy>,
    /// Uncollected drops only.
    pub coins: Vec<CoinDrop>,
    pub shop: Shop,
    pub portal: ExitPortal,
    pub used_fallback_map: bool,
}

impl GameState {
    pub fn live_enemies(&self) -> impl Iterator<Item = (EnemyId, &Enemy)> {
        self.enemies.iter().filter(|(_, enemy)| !enemy.is_dead())
    }

    pub fn live_enemy_count(&self) -> usize {
        self.live_enemies().count()
    }

    pub fn killed_enemy_count(&self) -> usize {
        self.enemies.len() - self.live_enemy_count()
    }

    /// Every non-player entity: enemies, coins, shop, then portal.
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        self.enemies
            .iter()
            .map(|(id, enemy)| EntityRef::Enemy(id, enemy))
            .chain(self.coins.iter().map(EntityRef::Coin))
            .chain(iter::once(EntityRef::Shop(&self.shop)))
            .chain(iter::once(EntityRef::Portal(&self.portal)))
    }
}

/// Borrowed view over one heterogeneous world entity.
#[derive(Clone, Copy, Debug)]
pub enum EntityRef<'a> {
    Enemy(EnemyId, &'a Enemy),
    Coin(&'a CoinDrop),
    Shop(&'a Shop),
    Portal(&'a ExitPortal),
}

impl EntityRef<'_> {
    pub fn position(&self) -> Point {
        match self {
            EntityRef::Enemy(_, enemy) => enemy.position(),
            EntityRef::Coin(coin) => coin.position(),
            EntityRef::Shop(shop) => shop.position(),
            EntityRef::Portal(portal) => portal.position(),
        }
    }

    /// Billboard for this entity, or `None` while it should not be drawn.
    pub fn sprite(&self) -> Option<WorldSprite> {
        let kind = match self {
            EntityRef::Enemy(id, enemy) if !enemy.is_dead() => SpriteKind::Enemy {
                id: *id,
                kind: enemy.kind,
                health_fraction: enemy.health_fraction(),
            },
            EntityRef::Enemy(..) => return None,
            EntityRef::Coin(coin) if !coin.is_collected() => SpriteKind::Coin { amount: coin.amount },
            EntityRef::Coin(_) => return None,
            EntityRef::Shop(_) => SpriteKind::Shop,
            EntityRef::Portal(portal) if portal.is_active() => SpriteKind::Portal,
            EntityRef::Portal(_) => return None,
        };
        Some(WorldSprite { position: self.position(), kind })
    }
}

/// Plain values for the HUD, copied out so the host never holds simulation borrows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HudSnapshot {
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub coins: u32,
    pub weapon: WeaponKind,
    pub enemies_remaining: usize,
    pub enemies_killed: usize,
    pub near_shop: bool,
    pub near_active_portal: bool,
    pub status: RunStatus,
}

impl HudSnapshot {
    pub fn health_fraction(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        f64::from(self.health) / f64::from(self.max_health)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn entities_list_enemies_then_coins_then_fixtures() {
        let mut state = arena_state();
        add_enemy(&mut state, EnemyKind::Basic, Point::new(8.5, 8.5));
        state.coins.push(CoinDrop::new(Point::new(3.5, 3.5), 7));
        let order: Vec<&str> = state
            .entities()
            .map(|entity| match entity {
                EntityRef::Enemy(..) => "enemy",
                EntityRef::Coin(_) => "coin",
                EntityRef::Shop(_) => "shop",
                EntityRef::Portal(_) => "portal",
            })
            .collect();
        assert_eq!(order, ["enemy", "coin", "shop", "portal"]);
    }

    #[test]
    fn portal_sprite_appears_only_once_active() {
        let mut state = arena_state();
        let hidden = state.entities().filter_map(|entity| entity.sprite()).count();
        assert_eq!(hidden, 1);
        state.portal.activate();
        let sprites: Vec<WorldSprite> =
            state.entities().filter_map(|entity| entity.sprite()).collect();
        assert_eq!(sprites.len(), 2);
        assert_eq!(sprites[1].kind, SpriteKind::Portal);
        assert_eq!(sprites[1].position, Point::new(10.5, 10.5));
    }

    #[test]
    fn health_fraction_handles_zero_max() {
        let hud = HudSnapshot {
            level: 1,
            health: 30,
            max_health: 0,
            coins: 0,
            weapon: WeaponKind::Pistol,
            enemies_remaining: 0,
            enemies_killed: 0,
            near_shop: false,
            near_active_portal: false,
            status: RunStatus::Playing,
        };
        assert_eq!(hud.health_fraction(), 0.0);
        assert_eq!(HudSnapshot { max_health: 120, ..hud }.health_fraction(), 0.25);
    }
}
