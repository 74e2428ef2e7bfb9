//! `Surface` backed by macroquad's immediate-mode shape and text calls.

use crawl_core::{Rgba, Surface, TextAlign};
use macroquad::prelude::*;

pub struct MacroquadSurface;

fn color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

impl Surface for MacroquadSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, rgba: Rgba) {
        draw_rectangle(x, y, width, height, color(rgba));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, rgba: Rgba) {
        draw_circle(x, y, radius, color(rgba));
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, rgba: Rgba) {
        draw_line(from.0, from.1, to.0, to.1, thickness, color(rgba));
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, rgba: Rgba, align: TextAlign) {
        let font_size = size.round().max(1.0) as u16;
        let x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - measure_text(text, None, font_size, 1.0).width / 2.0,
        };
        draw_text(text, x, y, f32::from(font_size), color(rgba));
    }
}
