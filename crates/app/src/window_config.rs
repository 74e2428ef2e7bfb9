//! Window configuration for the desktop app.

use crawl_app::APP_NAME;
use crawl_app::ui_scale::{UI_SCALE_ENV, resolve_ui_scale};
use macroquad::window::{Conf, screen_dpi_scale};
use std::env;

const DEFAULT_WINDOW_WIDTH: i32 = 1000;
const DEFAULT_WINDOW_HEIGHT: i32 = 750;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        high_dpi: true,
        window_resizable: true,
        ..Default::default()
    }
}

pub fn runtime_ui_scale(persisted_ui_scale: Option<f32>) -> f32 {
    let override_value = env::var(UI_SCALE_ENV).ok();
    resolve_ui_scale(screen_dpi_scale(), persisted_ui_scale, override_value.as_deref())
}
