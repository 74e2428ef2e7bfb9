//! Frame compositing onto a host-provided 2D surface.
//!
//! Painting happens in a fixed order with no depth buffer: background, wall slivers, billboards
//! far to near, then the HUD layers on top. The host supplies the primitives through [`Surface`].

use crate::config::{FIELD_OF_VIEW, MAX_RAYS};
use crate::game::{Game, HudSnapshot};
use crate::mapgen::Grid;
use crate::raycast::{HitSide, cast_view, ray_count};
use crate::sprites::{Billboard, SpriteKind, project_sprites};
use crate::types::{Cell, EnemyKind, Point, Pos, Viewport, WeaponKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn hex(rgb: u32) -> Self {
        Self { r: (rgb >> 16) as u8, g: (rgb >> 8) as u8, b: rgb as u8, a: u8::MAX }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8, ..self }
    }
}

pub mod palette {
    use super::Rgba;

    pub const CLEAR: Rgba = Rgba::hex(0x1a1a1a);
    pub const SKY: Rgba = Rgba::hex(0x2d3748);
    pub const FLOOR: Rgba = Rgba::hex(0x1a202c);
    pub const WHITE: Rgba = Rgba::hex(0xffffff);
    pub const BLACK: Rgba = Rgba::hex(0x000000);
    pub const GREEN: Rgba = Rgba::hex(0x48bb78);
    pub const YELLOW: Rgba = Rgba::hex(0xecc94b);
    pub const RED: Rgba = Rgba::hex(0xf56565);
    pub const GOLD: Rgba = Rgba::hex(0xfbbf24);
    pub const BLUE: Rgba = Rgba::hex(0x3b82f6);
    pub const MINIMAP_WALL: Rgba = Rgba::hex(0x4a5568);
    pub const MINIMAP_FLOOR: Rgba = Rgba::hex(0x1a1a1a);
    pub const MINIMAP_ENEMY: Rgba = Rgba::hex(0xe53e3e);
    pub const WEAPON_METAL: Rgba = Rgba::hex(0x4a5568);
    pub const WEAPON_GRIP: Rgba = Rgba::hex(0x2d3748);

    /// Near to far shading bands for x-side hits.
    pub const WALL_X: [Rgba; 4] =
        [Rgba::hex(0x4a5568), Rgba::hex(0x374151), Rgba::hex(0x1f2937), Rgba::hex(0x111827)];
    /// Near to far shading bands for y-side hits, one step darker.
    pub const WALL_Y: [Rgba; 4] =
        [Rgba::hex(0x374151), Rgba::hex(0x1f2937), Rgba::hex(0x111827), Rgba::hex(0x0f172a)];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Drawing primitives in pixel coordinates, origin top-left. Text `y` is the baseline.
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
    fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgba);
    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Rgba, align: TextAlign);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameOptions {
    pub show_minimap: bool,
    pub max_rays: u32,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self { show_minimap: true, max_rays: MAX_RAYS }
    }
}

const HUD_ORIGIN: f32 = 10.0;
const HUD_WIDTH: f32 = 280.0;
const HUD_HEIGHT: f32 = 130.0;
const HEALTH_BAR_WIDTH: f32 = 260.0;
const SPRITE_BAR_HEIGHT: f32 = 5.0;
const SPRITE_BAR_GAP: f32 = 10.0;
const PROMPT_WIDTH: f32 = 300.0;
const PROMPT_HEIGHT: f32 = 60.0;
const CROSSHAIR_ARM: f32 = 10.0;
const MINIMAP_SIZE: f32 = 150.0;
const MINIMAP_MARGIN: f32 = 10.0;
const PORTAL_PULSE_PERIOD_MS: f64 = 200.0;

pub fn compose_frame<S: Surface>(
    game: &Game,
    viewport: Viewport,
    options: FrameOptions,
    surface: &mut S,
) {
    let width = viewport.width as f32;
    let height = viewport.height as f32;
    surface.fill_rect(0.0, 0.0, width, height, palette::CLEAR);
    surface.fill_rect(0.0, 0.0, width, height / 2.0, palette::SKY);
    surface.fill_rect(0.0, height / 2.0, width, height / 2.0, palette::FLOOR);

    draw_walls(game, viewport, options.max_rays, surface);
    draw_billboards(game, viewport, surface);

    let hud = game.hud();
    draw_hud(&hud, surface);
    draw_weapon(hud.weapon, viewport, surface);
    draw_prompt(&hud, viewport, surface);
    draw_crosshair(viewport, surface);
    if options.show_minimap {
        draw_minimap(game, viewport, surface);
    }
}

/// Wall colour for a hit, darker with distance and on y-side faces.
pub fn wall_shade(distance: f64, side: HitSide) -> Rgba {
    let band = if distance < 3.0 {
        0
    } else if distance < 6.0 {
        1
    } else if distance < 10.0 {
        2
    } else {
        3
    };
    match side {
        HitSide::X => palette::WALL_X[band],
        HitSide::Y => palette::WALL_Y[band],
    }
}

pub fn health_color(fraction: f64) -> Rgba {
    if fraction > 0.5 {
        palette::GREEN
    } else if fraction > 0.25 {
        palette::YELLOW
    } else {
        palette::RED
    }
}

fn draw_walls<S: Surface>(game: &Game, viewport: Viewport, max_rays: u32, surface: &mut S) {
    let columns = ray_count(viewport.width, max_rays);
    if columns == 0 {
        return;
    }
    let player = game.player();
    let height = viewport.height as f32;
    let strip = viewport.width as f32 / columns as f32;
    let hits = cast_view(&game.state().grid, player.position, player.angle, columns, FIELD_OF_VIEW);

    for (column, hit) in hits.iter().enumerate() {
        let line_height =
            if hit.distance > 0.0 { (f64::from(viewport.height) / hit.distance) as f32 } else { height };
        let top = (height / 2.0 - line_height / 2.0).max(0.0);
        let bottom = (height / 2.0 + line_height / 2.0).min(height);
        surface.fill_rect(
            column as f32 * strip,
            top,
            strip.ceil(),
            bottom - top,
            wall_shade(hit.distance, hit.side),
        );
    }
}

fn draw_billboards<S: Surface>(game: &Game, viewport: Viewport, surface: &mut S) {
    let player = game.player();
    let billboards =
        project_sprites(player.position, player.angle, FIELD_OF_VIEW, viewport, game.world_sprites());
    let pulse_phase = game.elapsed_ms() / PORTAL_PULSE_PERIOD_MS;
    for billboard in &billboards {
        draw_billboard(billboard, viewport, pulse_phase, surface);
    }
}

fn draw_billboard<S: Surface>(
    billboard: &Billboard,
    viewport: Viewport,
    pulse_phase: f64,
    surface: &mut S,
) {
    let center_x = billboard.screen_x as f32;
    let center_y = viewport.height as f32 / 2.0;
    let size = billboard.size as f32;
    let left = center_x - size / 2.0;
    let top = center_y - size / 2.0;

    match billboard.kind {
        SpriteKind::Enemy { kind, health_fraction, .. } => {
            surface.fill_rect(left, top, size, size, enemy_color(kind));
            surface.text(
                enemy_glyph(kind),
                center_x,
                center_y + size * 0.25,
                size * 0.7,
                palette::WHITE,
                TextAlign::Center,
            );
            let bar_top = top - SPRITE_BAR_GAP;
            surface.fill_rect(left, bar_top, size, SPRITE_BAR_HEIGHT, palette::BLACK.with_alpha(0.5));
            surface.fill_rect(
                left,
                bar_top,
                size * health_fraction as f32,
                SPRITE_BAR_HEIGHT,
                health_color(health_fraction),
            );
        }
        SpriteKind::Coin { .. } => {
            surface.fill_circle(center_x, center_y, size / 3.0, palette::GOLD);
            let baseline = center_y + size * 0.18;
            surface.text("$", center_x, baseline, size * 0.5, palette::BLACK, TextAlign::Center);
        }
        SpriteKind::Shop => {
            surface.fill_rect(left, top, size, size, palette::BLUE);
            let baseline = center_y + size * 0.1;
            surface.text("SHOP", center_x, baseline, size * 0.3, palette::WHITE, TextAlign::Center);
        }
        SpriteKind::Portal => {
            let wave = pulse_phase.sin();
            surface.fill_rect(left, top, size, size, palette::GREEN.with_alpha(0.3 + wave * 0.2));
            let glyph_size = size * 0.7 * (1.0 + wave as f32 * 0.2);
            surface.text(
                "EXIT",
                center_x,
                center_y + glyph_size * 0.2,
                glyph_size * 0.5,
                palette::WHITE,
                TextAlign::Center,
            );
        }
    }
}

fn enemy_color(kind: EnemyKind) -> Rgba {
    match kind {
        EnemyKind::Basic => Rgba::hex(0xe53e3e),
        EnemyKind::Fast => Rgba::hex(0xff6b6b),
        EnemyKind::Tank => Rgba::hex(0x8b0000),
    }
}

fn enemy_glyph(kind: EnemyKind) -> &'static str {
    match kind {
        EnemyKind::Basic => "B",
        EnemyKind::Fast => "F",
        EnemyKind::Tank => "T",
    }
}

fn draw_hud<S: Surface>(hud: &HudSnapshot, surface: &mut S) {
    let left = HUD_ORIGIN + 10.0;
    surface.fill_rect(HUD_ORIGIN, HUD_ORIGIN, HUD_WIDTH, HUD_HEIGHT, palette::BLACK.with_alpha(0.7));
    let title = format!("CRAWL - Level {}", hud.level);
    surface.text(&title, left, 30.0, 16.0, palette::WHITE, TextAlign::Left);

    let fraction = hud.health_fraction();
    surface.fill_rect(left, 45.0, HEALTH_BAR_WIDTH, 20.0, palette::SKY);
    surface.fill_rect(left, 45.0, HEALTH_BAR_WIDTH * fraction as f32, 20.0, health_color(fraction));
    surface.text(
        &format!("HP: {}/{}", hud.health, hud.max_health),
        left + HEALTH_BAR_WIDTH / 2.0,
        60.0,
        14.0,
        palette::WHITE,
        TextAlign::Center,
    );

    surface.text(&format!("Coins: {}", hud.coins), left, 85.0, 14.0, palette::GOLD, TextAlign::Left);
    let enemy_color = if hud.enemies_remaining > 0 { palette::RED } else { palette::GREEN };
    surface.text(
        &format!("Enemies: {}", hud.enemies_remaining),
        160.0,
        85.0,
        14.0,
        enemy_color,
        TextAlign::Left,
    );
    surface.text(hud.weapon.name(), left, 105.0, 14.0, palette::WHITE, TextAlign::Left);
}

/// Held weapon at the bottom center; longer barrels for longer-range weapons.
fn draw_weapon<S: Surface>(weapon: WeaponKind, viewport: Viewport, surface: &mut S) {
    let center_x = viewport.width as f32 / 2.0;
    let bottom = viewport.height as f32;
    let (barrel_width, barrel_length) = match weapon {
        WeaponKind::Pistol => (14.0, 40.0),
        WeaponKind::Shotgun => (26.0, 55.0),
        WeaponKind::Rifle => (12.0, 75.0),
        WeaponKind::Sniper => (10.0, 95.0),
    };
    let grip_top = bottom - 45.0;
    surface.fill_rect(
        center_x - barrel_width / 2.0,
        grip_top - barrel_length,
        barrel_width,
        barrel_length,
        palette::WEAPON_METAL,
    );
    surface.fill_rect(center_x - 20.0, grip_top, 40.0, 45.0, palette::WEAPON_GRIP);
}

fn draw_prompt<S: Surface>(hud: &HudSnapshot, viewport: Viewport, surface: &mut S) {
    let (color, title, hint) = if hud.near_active_portal {
        (palette::GREEN, "PORTAL ACTIVE", "Press E for the next level")
    } else if hud.near_shop {
        (palette::BLUE, "SHOP NEARBY", "Press E to open")
    } else {
        return;
    };
    let center_x = viewport.width as f32 / 2.0;
    let bottom = viewport.height as f32;
    surface.fill_rect(
        center_x - PROMPT_WIDTH / 2.0,
        bottom - 150.0,
        PROMPT_WIDTH,
        PROMPT_HEIGHT,
        color.with_alpha(0.9),
    );
    surface.text(title, center_x, bottom - 124.0, 18.0, palette::WHITE, TextAlign::Center);
    surface.text(hint, center_x, bottom - 105.0, 14.0, palette::WHITE, TextAlign::Center);
}

fn draw_crosshair<S: Surface>(viewport: Viewport, surface: &mut S) {
    let x = viewport.width as f32 / 2.0;
    let y = viewport.height as f32 / 2.0;
    surface.line((x - CROSSHAIR_ARM, y), (x + CROSSHAIR_ARM, y), 2.0, palette::RED);
    surface.line((x, y - CROSSHAIR_ARM), (x, y + CROSSHAIR_ARM), 2.0, palette::RED);
}

fn draw_minimap<S: Surface>(game: &Game, viewport: Viewport, surface: &mut S) {
    let state = game.state();
    let grid: &Grid = &state.grid;
    let cell = MINIMAP_SIZE / grid.width().max(grid.height()).max(1) as f32;
    let origin_x = viewport.width as f32 - MINIMAP_SIZE - MINIMAP_MARGIN;
    let origin_y = MINIMAP_MARGIN;
    let to_map = |point: Point| (origin_x + point.x as f32 * cell, origin_y + point.y as f32 * cell);

    surface.fill_rect(
        origin_x - 5.0,
        origin_y - 5.0,
        MINIMAP_SIZE + 10.0,
        MINIMAP_SIZE + 10.0,
        palette::BLACK.with_alpha(0.8),
    );
    for pos in grid.positions() {
        let Pos { y, x } = pos;
        let color = match grid.cell_at(pos) {
            Cell::Wall => palette::MINIMAP_WALL,
            Cell::Floor => palette::MINIMAP_FLOOR,
        };
        surface.fill_rect(
            origin_x + x as f32 * cell,
            origin_y + y as f32 * cell,
            cell - 0.5,
            cell - 0.5,
            color,
        );
    }

    let (shop_x, shop_y) = to_map(state.shop.position);
    surface.fill_rect(shop_x - 2.0, shop_y - 2.0, 4.0, 4.0, palette::BLUE);
    for (_, enemy) in state.live_enemies() {
        let (x, y) = to_map(enemy.position);
        surface.fill_rect(x - 1.5, y - 1.5, 3.0, 3.0, palette::MINIMAP_ENEMY);
    }

    let player = game.player();
    let (x, y) = to_map(player.position);
    surface.fill_circle(x, y, 3.0, palette::GREEN);
    let heading = player.position.offset(player.angle, f64::from(8.0 / cell));
    surface.line((x, y), to_map(heading), 2.0, palette::GREEN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Damageable;
    use crate::game::test_support::{add_enemy, arena_state, install};

    #[derive(Clone, Debug, PartialEq)]
    enum Op {
        Rect { x: f32, y: f32, width: f32, height: f32, color: Rgba },
        Circle { color: Rgba },
        Line { color: Rgba },
        Text { text: String },
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
            self.ops.push(Op::Rect { x, y, width, height, color });
        }

        fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, color: Rgba) {
            self.ops.push(Op::Circle { color });
        }

        fn line(&mut self, _from: (f32, f32), _to: (f32, f32), _thickness: f32, color: Rgba) {
            self.ops.push(Op::Line { color });
        }

        fn text(&mut self, text: &str, _x: f32, _y: f32, _size: f32, _color: Rgba, _align: TextAlign) {
            self.ops.push(Op::Text { text: text.to_string() });
        }
    }

    const VIEW: Viewport = Viewport { width: 640, height: 480 };

    fn render(game: &Game, options: FrameOptions) -> Vec<Op> {
        let mut recorder = Recorder::default();
        compose_frame(game, VIEW, options, &mut recorder);
        recorder.ops
    }

    #[test]
    fn background_is_painted_first() {
        let ops = render(&Game::new(4), FrameOptions::default());
        assert_eq!(
            ops[0],
            Op::Rect { x: 0.0, y: 0.0, width: 640.0, height: 480.0, color: palette::CLEAR }
        );
        assert_eq!(
            ops[1],
            Op::Rect { x: 0.0, y: 0.0, width: 640.0, height: 240.0, color: palette::SKY }
        );
        assert_eq!(
            ops[2],
            Op::Rect { x: 0.0, y: 240.0, width: 640.0, height: 240.0, color: palette::FLOOR }
        );
    }

    #[test]
    fn one_wall_sliver_per_ray() {
        let options = FrameOptions { show_minimap: false, max_rays: 100 };
        let ops = render(&Game::new(4), options);
        let slivers = ops[3..]
            .iter()
            .take_while(|op| matches!(op, Op::Rect { width, .. } if *width == 7.0))
            .count();
        assert_eq!(slivers, 100);
    }

    #[test]
    fn minimap_is_optional() {
        let game = Game::new(4);
        let with = render(&game, FrameOptions::default());
        let without = render(&game, FrameOptions { show_minimap: false, ..FrameOptions::default() });
        let cells = game.state().grid.width() * game.state().grid.height();
        assert!(with.len() >= without.len() + cells);
        assert!(matches!(without.last(), Some(Op::Line { color }) if *color == palette::RED));
    }

    #[test]
    fn minimap_skips_dead_enemies() {
        let mut game = Game::new(4);
        let mut state = arena_state();
        let dead = add_enemy(&mut state, EnemyKind::Basic, Point::new(12.5, 12.5));
        add_enemy(&mut state, EnemyKind::Fast, Point::new(14.5, 12.5));
        state.enemies[dead].take_damage(500);
        install(&mut game, state);

        let ops = render(&game, FrameOptions { max_rays: 10, ..FrameOptions::default() });
        let dots = ops
            .iter()
            .filter(|op| {
                matches!(op, Op::Rect { width, color, .. }
                    if *width == 3.0 && *color == palette::MINIMAP_ENEMY)
            })
            .count();
        assert_eq!(dots, 1);
        assert_eq!(game.hud().enemies_remaining, 1);
        assert_eq!(game.hud().enemies_killed, 1);
    }

    #[test]
    fn hud_reports_level_and_weapon() {
        let ops = render(&Game::new(4), FrameOptions::default());
        let texts: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(texts.contains(&"CRAWL - Level 1"));
        assert!(texts.contains(&"HP: 100/100"));
        assert!(texts.contains(&"Pistol"));
        assert!(texts.contains(&"Enemies: 8"));
    }

    #[test]
    fn shading_darkens_with_distance_and_side() {
        assert_eq!(wall_shade(1.0, HitSide::X), palette::WALL_X[0]);
        assert_eq!(wall_shade(3.0, HitSide::X), palette::WALL_X[1]);
        assert_eq!(wall_shade(9.9, HitSide::Y), palette::WALL_Y[2]);
        assert_eq!(wall_shade(40.0, HitSide::Y), palette::WALL_Y[3]);
        assert_eq!(wall_shade(1.0, HitSide::Y), wall_shade(4.0, HitSide::X));
    }

    #[test]
    fn health_colour_thresholds() {
        assert_eq!(health_color(1.0), palette::GREEN);
        assert_eq!(health_color(0.5), palette::YELLOW);
        assert_eq!(health_color(0.26), palette::YELLOW);
        assert_eq!(health_color(0.25), palette::RED);
        assert_eq!(health_color(0.0), palette::RED);
    }

    #[test]
    fn alpha_scales_to_a_byte() {
        assert_eq!(palette::BLACK.with_alpha(0.5).a, 128);
        assert_eq!(palette::BLACK.with_alpha(2.0).a, 255);
        assert_eq!(Rgba::hex(0x48bb78), Rgba { r: 72, g: 187, b: 120, a: 255 });
    }
}
