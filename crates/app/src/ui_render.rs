//! Overlay panels drawn over the 3D frame while the simulation is paused.

use crate::game_layout::{OverlayLayout, PanelRect};
use crate::ui_text::{
    GAME_OVER_FOOTER, SHOP_FOOTER, game_over_lines, mode_hint, shop_lines, shop_title,
};
use crawl_app::app_loop::{AppMode, AppState};
use crawl_app::ui_scale::scaled;
use crawl_core::Game;
use macroquad::prelude::*;

const DIM_COLOR: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.6 };
const PANEL_COLOR: Color = Color { r: 0.10, g: 0.12, b: 0.16, a: 0.95 };
const BORDER_COLOR: Color = Color { r: 0.98, g: 0.75, b: 0.14, a: 1.0 };
const NOTICE_COLOR: Color = Color { r: 0.93, g: 0.79, b: 0.29, a: 1.0 };
const LINE_HEIGHT: f32 = 26.0;
const TEXT_PAD: f32 = 4.0;

pub fn draw_overlay(
    game: &Game,
    app_state: &AppState,
    run_seed: u64,
    layout: &OverlayLayout,
    ui_scale: f32,
) {
    match app_state.mode {
        AppMode::Shop => {
            draw_panel(layout.panel, ui_scale);
            draw_header(&shop_title(game), layout.header, BORDER_COLOR, ui_scale);
            let mut lines = shop_lines(game);
            if let Some(notice) = &app_state.notice {
                lines.push(String::new());
                lines.push(notice.clone());
            }
            draw_body(&lines, layout.body, ui_scale, app_state.notice.is_some());
            draw_footer(SHOP_FOOTER, layout.footer, ui_scale);
        }
        AppMode::GameOver => {
            draw_panel(layout.panel, ui_scale);
            draw_header("GAME OVER", layout.header, RED, ui_scale);
            draw_body(&game_over_lines(game, run_seed), layout.body, ui_scale, false);
            draw_footer(GAME_OVER_FOOTER, layout.footer, ui_scale);
        }
        AppMode::Playing => draw_hint(mode_hint(app_state.mode), ui_scale),
        AppMode::Exited => {}
    }
}

fn draw_panel(panel: PanelRect, ui_scale: f32) {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), DIM_COLOR);
    draw_rectangle(panel.x, panel.y, panel.width, panel.height, PANEL_COLOR);
    draw_rectangle_lines(
        panel.x,
        panel.y,
        panel.width,
        panel.height,
        scaled(2.0, ui_scale),
        BORDER_COLOR,
    );
}

fn draw_header(title: &str, rect: PanelRect, color: Color, ui_scale: f32) {
    let size = scaled(32.0, ui_scale);
    let width = measure_text(title, None, size as u16, 1.0).width;
    draw_text(title, rect.x + (rect.width - width) / 2.0, rect.y + size, size, color);
}

fn draw_body(lines: &[String], rect: PanelRect, ui_scale: f32, last_is_notice: bool) {
    let line_height = scaled(LINE_HEIGHT, ui_scale);
    let visible = ((rect.height / line_height).floor() as usize).max(1);
    let start = lines.len().saturating_sub(visible);
    for (row, line) in lines[start..].iter().enumerate() {
        let color =
            if last_is_notice && start + row == lines.len() - 1 { NOTICE_COLOR } else { WHITE };
        draw_text(
            line,
            rect.x + scaled(TEXT_PAD, ui_scale),
            rect.y + (row as f32 + 1.0) * line_height,
            scaled(20.0, ui_scale),
            color,
        );
    }
}

fn draw_footer(text: &str, rect: PanelRect, ui_scale: f32) {
    draw_text(
        text,
        rect.x + scaled(TEXT_PAD, ui_scale),
        rect.y + rect.height - scaled(TEXT_PAD, ui_scale),
        scaled(18.0, ui_scale),
        LIGHTGRAY,
    );
}

fn draw_hint(text: &str, ui_scale: f32) {
    let size = scaled(16.0, ui_scale);
    draw_text(text, scaled(10.0, ui_scale), screen_height() - scaled(10.0, ui_scale), size, GRAY);
}
