mod frame_input;
mod game_layout;
mod surface;
mod ui_render;
mod ui_text;
mod window_config;

use std::env;

use crawl_app::app_loop::AppState;
use crawl_app::fixed_step::FixedStep;
use crawl_app::seed::{
    SeedChoice, generate_runtime_seed, resolve_level_from_args, resolve_seed_from_args,
};
use crawl_app::settings_file::SettingsFile;
use crawl_app::{format_seed, format_snapshot_hash, status_label};
use crawl_core::config::TICK_RATE_HZ;
use crawl_core::{Game, GameEvent, TickReport, Viewport, compose_frame};
use env_logger::Env;
use frame_input::capture_frame_input;
use game_layout::{compute_overlay_layout, setup_layout};
use macroquad::prelude::*;
use surface::MacroquadSurface;
use taffy::TaffyTree;
use ui_render::draw_overlay;
use window_config::{build_window_conf, runtime_ui_scale};

fn window_conf() -> Conf {
    build_window_conf()
}

fn log_report(report: &TickReport) {
    for event in &report.events {
        match event {
            GameEvent::LevelStarted { level, enemies, fallback_map } => {
                log::info!("level {level} started with {enemies} enemies (lattice: {fallback_map})");
            }
            GameEvent::PlayerDied => log::info!("player died at tick {}", report.tick),
            other => log::debug!("tick {}: {other:?}", report.tick),
        }
    }
}

fn save_settings(settings: &SettingsFile) {
    let Some(path) = SettingsFile::get_default_path() else {
        return;
    };
    if let Err(err) = settings.write_atomic(&path) {
        log::warn!("could not save settings to {}: {err}", path.display());
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let seed_choice = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };
    let start_level = match resolve_level_from_args(&args) {
        Ok(level) => level,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };
    let run_seed = seed_choice.value();
    match seed_choice {
        SeedChoice::Cli(_) => log::info!("seed {} (from --seed)", format_seed(run_seed)),
        SeedChoice::Generated(_) => log::info!("seed {} (generated)", format_seed(run_seed)),
    }

    let settings_path = SettingsFile::get_default_path();
    let mut settings = SettingsFile::load_or_default(settings_path.as_deref());
    let mut ui_scale = runtime_ui_scale(settings.ui_scale);

    let mut game = match start_level {
        Some(level) => Game::starting_at(run_seed, level),
        None => Game::new(run_seed),
    };
    let mut app_state = AppState::new();
    let mut clock = FixedStep::new(TICK_RATE_HZ);

    let mut taffy = TaffyTree::new();
    let mut layout_nodes = setup_layout(&mut taffy, ui_scale);

    while app_state.is_running() {
        let input = capture_frame_input();

        if input.toggle_minimap {
            settings.show_minimap = !settings.show_minimap;
            save_settings(&settings);
        }
        if let Some(action) = input.ui_scale_action {
            ui_scale = action.apply(ui_scale);
            settings.ui_scale = Some(ui_scale);
            save_settings(&settings);
            taffy = TaffyTree::new();
            layout_nodes = setup_layout(&mut taffy, ui_scale);
        }

        app_state.handle_keys(&mut game, &input.keys_pressed);
        if !app_state.is_running() {
            break;
        }

        for _ in 0..clock.advance(f64::from(get_frame_time())) {
            match app_state.step(&mut game, &input.held) {
                Some(report) => log_report(&report),
                None => {
                    clock.reset();
                    break;
                }
            }
        }

        let viewport = Viewport { width: screen_width() as u32, height: screen_height() as u32 };
        compose_frame(&game, viewport, settings.frame_options(), &mut MacroquadSurface);

        let layout =
            compute_overlay_layout(&mut taffy, &layout_nodes, screen_width(), screen_height());
        draw_overlay(&game, &app_state, run_seed, &layout, ui_scale);

        next_frame().await
    }

    log::info!(
        "exiting on level {} at tick {} ({}), snapshot {}",
        game.level(),
        game.current_tick(),
        status_label(game.status()),
        format_snapshot_hash(game.snapshot_hash())
    );
}
