//! Stable snapshot hashing for deterministic verification.
//! Floats are hashed by bit pattern, so two runs match only if they are bit-identical.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u64(self.elapsed_ms.to_bits());
        match self.status {
            RunStatus::Playing => hasher.write_u8(0),
            RunStatus::LevelTransition { next_level } => {
                hasher.write_u8(1);
                hasher.write_u32(next_level);
            }
            RunStatus::GameOver => hasher.write_u8(2),
        }

        let state = &self.state;
        hasher.write_u32(state.level);
        hasher.write(&state.grid.to_bytes());

        let player = &state.player;
        write_point(&mut hasher, player.position);
        hasher.write_u64(player.angle.to_bits());
        hasher.write_u32(player.health());
        hasher.write_u32(player.coins());
        hasher.write_usize(player.equipped_index());
        for weapon in player.weapons() {
            hasher.write_u8(weapon.kind() as u8);
            hasher.write_u64(weapon.last_fired_ms().map_or(u64::MAX, f64::to_bits));
        }

        hasher.write_usize(state.enemies.len());
        for (_, enemy) in &state.enemies {
            hasher.write_u8(enemy.kind as u8);
            write_point(&mut hasher, enemy.position);
            hasher.write_u64(enemy.angle.to_bits());
            hasher.write_u32(enemy.health());
        }

        hasher.write_usize(state.coins.len());
        for coin in &state.coins {
            write_point(&mut hasher, coin.position);
            hasher.write_u32(coin.amount);
        }

        write_point(&mut hasher, state.shop.position);
        write_point(&mut hasher, state.portal.position);
        hasher.write_u8(u8::from(state.portal.is_active()));
        hasher.finish()
    }
}

fn write_point(hasher: &mut Xxh3, point: Point) {
    hasher.write_u64(point.x.to_bits());
    hasher.write_u64(point.y.to_bits());
}
