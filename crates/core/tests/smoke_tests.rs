use crawl_core::entities::{Damageable, Player, Positioned};
use crawl_core::mapgen::{MapGenerator, find_spawn_point};
use crawl_core::progression::LevelPlan;
use crawl_core::{Action, Game, GameRng, InputState, Point, RunStatus, WeaponKind};

#[test]
fn test_player_walking_into_a_wall_is_rejected_on_a_generated_map() {
    let mut rng = GameRng::seed_from_u64(2024);
    let grid = MapGenerator::new(25, 25).generate(&mut rng).into_grid();
    let spawn = find_spawn_point(&grid, &mut rng);
    assert!(grid.is_open(spawn));

    let mut player = Player::new(spawn);
    let mut steps = 0;
    while player.try_move(&grid, 1.0) {
        steps += 1;
        assert!(steps < 1_000, "player never reached a wall");
    }
    let stopped_at = player.position;
    assert!(!player.try_move(&grid, 1.0));
    assert_eq!(player.position, stopped_at);
    assert!(!grid.is_open(stopped_at.offset(player.angle, player.speed)));
}

#[test]
fn test_level_scaling_is_monotonic_from_level_one_to_three() {
    let mut game = Game::new(7);
    let level_one_count = game.state().enemies.len();
    let level_one_health: Vec<u32> =
        game.state().enemies.values().map(|enemy| enemy.max_health()).collect();
    let base: Vec<u32> =
        game.state().enemies.values().map(|enemy| enemy.kind.base_health()).collect();
    assert_eq!(level_one_health, base);

    game.start_level(3);
    let plan = LevelPlan::for_level(3);
    assert!(game.state().enemies.len() >= level_one_count);
    for enemy in game.state().enemies.values() {
        assert_eq!(enemy.max_health(), plan.scaled_health(enemy.kind.base_health()));
        assert!(enemy.max_health() >= enemy.kind.base_health());
    }
}

#[test]
fn test_buying_with_no_coins_leaves_the_player_unchanged() {
    let mut game = Game::new(31);
    let shop_position = game.state().shop.position();
    game.player_mut().position = Point::new(shop_position.x + 0.5, shop_position.y);
    let before = game.player().clone();

    assert!(game.buy_weapon(WeaponKind::Sniper).is_err());
    assert_eq!(game.player().coins(), before.coins());
    assert_eq!(game.player().weapons(), before.weapons());
}

#[test]
fn test_idle_run_is_stable_or_ends_in_game_over() {
    let mut game = Game::new(5);
    for _ in 0..3_600 {
        let report = game.tick(&InputState::default());
        assert!(game.player().health() <= 100);
        if report.status == RunStatus::GameOver {
            assert_eq!(game.player().health(), 0);
            let frozen = game.snapshot_hash();
            game.tick(&InputState::default().with(Action::Forward));
            assert_eq!(game.snapshot_hash(), frozen);
            return;
        }
    }
}
