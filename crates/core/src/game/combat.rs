//! Hitscan shot resolution and its effects on the level.

use super::*;
use crate::config::SHOT_CONE_HALF_ANGLE;
use crate::entities::{CoinDrop, Enemy};
use crate::sprites::normalize_angle;

/// Picks the nearest live enemy inside the forward cone and the weapon's range.
///
/// Equal distances keep the first enemy enumerated.
pub fn resolve_shot<'a, I>(origin: Point, facing: f64, range: f64, enemies: I) -> Option<EnemyId>
where
    I: IntoIterator<Item = (EnemyId, &'a Enemy)>,
{
    let mut best: Option<(EnemyId, f64)> = None;
    for (id, enemy) in enemies {
        if enemy.is_dead() {
            continue;
        }
        let distance = origin.distance_to(enemy.position);
        if distance >= range {
            continue;
        }
        let offset = normalize_angle(origin.angle_to(enemy.position) - facing);
        if offset.abs() >= SHOT_CONE_HALF_ANGLE {
            continue;
        }
        if best.is_none_or(|(_, nearest)| distance < nearest) {
            best = Some((id, distance));
        }
    }
    best.map(|(id, _)| id)
}

impl Game {
    /// Fires the equipped weapon if it is off cooldown and applies the hit.
    pub(super) fn fire(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        let GameState { player, enemies, coins, .. } = &mut self.state;
        if !player.weapon_mut().try_fire(now_ms) {
            return;
        }
        let weapon = player.weapon();
        events.push(GameEvent::ShotFired { weapon: weapon.kind() });

        let Some(id) = resolve_shot(player.position, player.angle, weapon.range(), enemies.iter())
        else {
            return;
        };
        let Some(enemy) = enemies.get_mut(id) else {
            return;
        };
        enemy.take_damage(weapon.damage());
        events.push(GameEvent::EnemyHit { enemy: id, damage: weapon.damage() });
        if !enemy.is_dead() {
            return;
        }

        let amount = enemy.roll_coin_drop(&mut self.rng);
        coins.push(CoinDrop::new(enemy.position, amount));
        let left = enemies.values().filter(|enemy| !enemy.is_dead()).count();
        log::debug!("enemy killed, dropped {amount} coins ({left} left)");
        events.push(GameEvent::EnemyKilled { enemy: id, coins: amount });
    }
}
