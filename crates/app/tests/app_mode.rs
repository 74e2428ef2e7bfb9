use crawl_app::app_loop::{AppMode, AppState};
use crawl_app::fixed_step::FixedStep;
use crawl_core::config::TICK_RATE_HZ;
use crawl_core::entities::Damageable;
use crawl_core::{Action, Game, InputState, RunStatus};
use macroquad::prelude::KeyCode;

#[test]
fn test_fixed_step_drives_one_tick_per_sixtieth() {
    let mut game = Game::new(31);
    let mut app = AppState::new();
    let mut clock = FixedStep::new(TICK_RATE_HZ);
    let input = InputState::default().with(Action::RotateLeft);

    for _ in 0..30 {
        for _ in 0..clock.advance(1.0 / 30.0 + 1e-9) {
            app.step(&mut game, &input);
        }
    }

    assert_eq!(game.current_tick(), 60);
    assert_eq!(app.mode, AppMode::Playing);
}

#[test]
fn test_idle_run_ends_in_game_over_or_keeps_playing() {
    let mut game = Game::new(12345);
    let mut app = AppState::new();
    let idle = InputState::default();

    for _ in 0..3_600 {
        if app.step(&mut game, &idle).is_none() {
            break;
        }
    }

    match game.status() {
        RunStatus::GameOver => {
            assert_eq!(app.mode, AppMode::GameOver);
            let frozen = game.current_tick();
            assert!(app.step(&mut game, &idle).is_none());
            assert_eq!(game.current_tick(), frozen);

            app.handle_keys(&mut game, &[KeyCode::Enter]);
            assert_eq!(app.mode, AppMode::Playing);
            assert_eq!(game.status(), RunStatus::Playing);
            assert_eq!(game.player().health(), game.player().max_health());
        }
        status => {
            assert_eq!(status, RunStatus::Playing);
            assert_eq!(app.mode, AppMode::Playing);
        }
    }
}

#[test]
fn test_escape_from_game_over_exits() {
    let mut game = Game::new(5);
    let mut app = AppState { mode: AppMode::GameOver, notice: None };
    app.handle_keys(&mut game, &[KeyCode::Escape]);
    assert!(!app.is_running());
}

#[test]
fn test_number_keys_select_owned_weapons_only() {
    let mut game = Game::new(8);
    let mut app = AppState::new();
    app.handle_keys(&mut game, &[KeyCode::Key3]);
    assert_eq!(game.player().equipped_index(), 0);
    app.handle_keys(&mut game, &[KeyCode::Key1]);
    assert_eq!(game.player().equipped_index(), 0);
}
