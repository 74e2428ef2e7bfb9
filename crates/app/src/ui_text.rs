//! Text for the shop and game-over overlays and the window status line.

use crawl_app::app_loop::AppMode;
use crawl_app::{format_seed, format_snapshot_hash};
use crawl_core::Game;
use crawl_core::entities::Weapon;

pub const SHOP_FOOTER: &str = "1-3 buy   E / Esc close";
pub const GAME_OVER_FOOTER: &str = "R / Enter restart   Esc quit";

pub fn mode_hint(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Playing => "WASD/arrows move   Space fire   E use   Q/Tab swap   M map   Esc quit",
        AppMode::Shop => SHOP_FOOTER,
        AppMode::GameOver => GAME_OVER_FOOTER,
        AppMode::Exited => "",
    }
}

pub fn shop_title(game: &Game) -> String {
    format!("SHOP   ${}", game.player().coins())
}

/// One row per item for sale, numbered by the key that buys it.
pub fn shop_lines(game: &Game) -> Vec<String> {
    let player = game.player();
    game.state()
        .shop
        .inventory()
        .iter()
        .enumerate()
        .map(|(index, weapon)| {
            let tag = if player.owns(weapon.kind()) {
                "owned"
            } else if player.coins() < weapon.cost() {
                "need coins"
            } else {
                ""
            };
            format!("{}  {}  {tag}", index + 1, weapon_summary(weapon))
        })
        .collect()
}

pub fn weapon_summary(weapon: &Weapon) -> String {
    format!(
        "{:<8} ${:<4} dmg {:<3} range {:<2} {:.1}s",
        weapon.name(),
        weapon.cost(),
        weapon.damage(),
        weapon.range(),
        weapon.cooldown_ms() / 1000.0
    )
}

pub fn game_over_lines(game: &Game, run_seed: u64) -> Vec<String> {
    vec![
        format!("Fell on level {}", game.level()),
        format!("Enemies killed: {}", game.state().killed_enemy_count()),
        format!("Coins: {}", game.player().coins()),
        format!("Weapons: {}", game.player().weapons().len()),
        format!("Seed: {}", format_seed(run_seed)),
        format!("Snapshot: {}", format_snapshot_hash(game.snapshot_hash())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shop_lists_the_three_items_for_sale() {
        let game = Game::new(4);
        let lines = shop_lines(&game);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("1  Shotgun"));
        assert!(lines[2].contains("Sniper"));
        assert!(lines.iter().all(|line| line.contains("need coins")));
        assert_eq!(shop_title(&game), "SHOP   $0");
    }

    #[test]
    fn game_over_recap_names_seed_and_hash() {
        let game = Game::new(99);
        let lines = game_over_lines(&game, 99);
        assert!(lines.contains(&"Seed: 99".to_string()));
        assert!(lines.contains(&"Enemies killed: 0".to_string()));
        assert!(lines.iter().any(|line| line.starts_with("Snapshot: 0x")));
    }

    #[test]
    fn every_live_mode_has_a_hint() {
        for mode in [AppMode::Playing, AppMode::Shop, AppMode::GameOver] {
            assert!(!mode_hint(mode).is_empty());
        }
    }
}
