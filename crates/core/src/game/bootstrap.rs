//! Level construction: map, player placement, enemy roster, shop, and portal.
//! Spawn order is fixed so a seed always yields the same level.

use slotmap::SlotMap;

use super::*;
use crate::entities::{Enemy, ExitPortal, Shop};
use crate::mapgen::{MapGenerator, find_spawn_point};
use crate::progression::LevelPlan;

pub(super) fn build_level(level: u32, rng: &mut GameRng, carried: Option<Player>) -> GameState {
    let plan = LevelPlan::for_level(level);
    let generated = MapGenerator::new(plan.map_side, plan.map_side).generate(rng);
    let used_fallback_map = generated.used_fallback;
    let attempts = generated.attempts;
    let grid = generated.into_grid();

    let spawn = find_spawn_point(&grid, rng);
    let player = match carried {
        Some(mut player) => {
            player.respawn_at(spawn);
            player
        }
        None => Player::new(spawn),
    };

    let mut enemies = SlotMap::with_key();
    for _ in 0..plan.enemy_count {
        let position = find_spawn_point(&grid, rng);
        let kind = rng.choose(&EnemyKind::SPAWN_TABLE).copied().unwrap_or(EnemyKind::Basic);
        let angle = rng.angle();
        let health = plan.scaled_health(kind.base_health());
        enemies.insert(Enemy::new(kind, position, angle).with_max_health(health));
    }

    let shop = Shop::new(find_spawn_point(&grid, rng));
    let portal = ExitPortal::new(find_spawn_point(&grid, rng));

    log::info!(
        "level {} ready: {}x{} map after {attempts} attempts{}, {} enemies",
        plan.level,
        grid.width(),
        grid.height(),
        if used_fallback_map { " (corridor lattice)" } else { "" },
        enemies.len()
    );

    GameState {
        level: plan.level,
        grid,
        player,
        enemies,
        coins: Vec::new(),
        shop,
        portal,
        used_fallback_map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Positioned;

    #[test]
    fn level_roster_follows_the_plan() {
        let mut rng = GameRng::seed_from_u64(4);
        let state = build_level(2, &mut rng, None);
        let plan = LevelPlan::for_level(2);
        assert_eq!(state.level, 2);
        assert_eq!(state.grid.width(), plan.map_side);
        assert_eq!(state.enemies.len(), plan.enemy_count);
        for (_, enemy) in &state.enemies {
            assert_eq!(enemy.max_health(), plan.scaled_health(enemy.kind.base_health()));
            assert_eq!(enemy.health(), enemy.max_health());
        }
        assert!(!state.portal.is_active());
        assert!(state.coins.is_empty());
    }

    #[test]
    fn everything_spawns_on_floor() {
        for seed in 0..8 {
            let mut rng = GameRng::seed_from_u64(seed);
            let state = build_level(1, &mut rng, None);
            assert!(state.grid.is_open(state.player.position), "seed {seed} player");
            assert!(state.grid.is_open(state.shop.position()), "seed {seed} shop");
            assert!(state.grid.is_open(state.portal.position()), "seed {seed} portal");
            for (_, enemy) in &state.enemies {
                assert!(state.grid.is_open(enemy.position), "seed {seed} enemy");
            }
        }
    }

    #[test]
    fn carried_player_keeps_inventory_and_resets_facing() {
        let mut rng = GameRng::seed_from_u64(9);
        let mut veteran = Player::new(Point::new(1.5, 1.5));
        veteran.add_coins(300);
        veteran.angle = 2.0;
        let state = build_level(2, &mut rng, Some(veteran));
        assert_eq!(state.player.coins(), 300);
        assert_eq!(state.player.angle, 0.0);
    }
}
