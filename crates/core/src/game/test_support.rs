//! Shared fixtures for the `game` submodule test suites.

use slotmap::SlotMap;

use super::*;
use crate::entities::{Enemy, ExitPortal, Shop};
use crate::mapgen::Grid;

/// 20x20 walled room, player at (5.5, 5.5) facing east, shop within reach, portal at (10.5, 10.5),
/// and no enemies.
pub(crate) fn arena_state() -> GameState {
    let mut rows = vec!["#".repeat(20)];
    for _ in 0..18 {
        rows.push(format!("#{}#", ".".repeat(18)));
    }
    rows.push("#".repeat(20));
    GameState {
        level: 1,
        grid: Grid::from_rows(&rows).expect("arena grid"),
        player: Player::new(Point::new(5.5, 5.5)),
        enemies: SlotMap::with_key(),
        coins: Vec::new(),
        shop: Shop::new(Point::new(5.5, 4.5)),
        portal: ExitPortal::new(Point::new(10.5, 10.5)),
        used_fallback_map: false,
    }
}

pub(crate) fn add_enemy(state: &mut GameState, kind: EnemyKind, position: Point) -> EnemyId {
    state.enemies.insert(Enemy::new(kind, position, 0.0))
}

pub(crate) fn install(game: &mut Game, state: GameState) {
    game.state = state;
    game.status = RunStatus::Playing;
    game.pending.clear();
}
