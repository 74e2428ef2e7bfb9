//! Host-side mode machine: decides whether the simulation ticks this step and routes the
//! once-per-press keys that belong to overlays rather than to the simulation.

use crawl_core::entities::PurchaseError;
use crawl_core::{Game, GameEvent, InputState, RunStatus, TickReport, WeaponKind};
use macroquad::prelude::KeyCode;

const SELECT_KEYS: [KeyCode; 4] = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Playing,
    /// Shop overlay is open; the simulation is paused.
    Shop,
    GameOver,
    Exited,
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    /// One-line message for the overlay, e.g. the outcome of the last purchase.
    pub notice: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.mode != AppMode::Exited
    }

    /// Handles keys pressed this frame. Called once per rendered frame, before stepping.
    pub fn handle_keys(&mut self, game: &mut Game, keys_pressed: &[KeyCode]) {
        match self.mode {
            AppMode::Playing => {
                if keys_pressed.contains(&KeyCode::Escape) {
                    log::info!("exit requested at tick {}", game.current_tick());
                    self.mode = AppMode::Exited;
                    return;
                }
                for (index, key) in SELECT_KEYS.iter().enumerate() {
                    if keys_pressed.contains(key) {
                        game.player_mut().select_weapon(index);
                    }
                }
            }
            AppMode::Shop => {
                if keys_pressed.contains(&KeyCode::Escape) || keys_pressed.contains(&KeyCode::E) {
                    self.close_shop();
                    return;
                }
                for (key, kind) in SELECT_KEYS.iter().zip(WeaponKind::SHOP_STOCK) {
                    if keys_pressed.contains(key) {
                        self.notice = Some(purchase_notice(kind, game.buy_weapon(kind)));
                    }
                }
            }
            AppMode::GameOver => {
                if keys_pressed.contains(&KeyCode::Escape) {
                    self.mode = AppMode::Exited;
                } else if keys_pressed.contains(&KeyCode::R)
                    || keys_pressed.contains(&KeyCode::Enter)
                {
                    game.restart();
                    self.notice = None;
                    self.mode = AppMode::Playing;
                }
            }
            AppMode::Exited => {}
        }
    }

    /// Runs one simulation step if the current mode allows it.
    pub fn step(&mut self, game: &mut Game, input: &InputState) -> Option<TickReport> {
        if self.mode != AppMode::Playing {
            return None;
        }
        let report = game.tick(input);
        if report.status == RunStatus::GameOver {
            self.mode = AppMode::GameOver;
        } else if report.events.contains(&GameEvent::ShopOpened) {
            self.mode = AppMode::Shop;
            self.notice = None;
        }
        Some(report)
    }

    fn close_shop(&mut self) {
        self.mode = AppMode::Playing;
        self.notice = None;
    }
}

fn purchase_notice(kind: WeaponKind, result: Result<(), PurchaseError>) -> String {
    match result {
        Ok(()) => format!("Bought {}", kind.name()),
        Err(err) => {
            log::debug!("purchase of {} refused: {err}", kind.name());
            err.to_string()
        }
    }
}
