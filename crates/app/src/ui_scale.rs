//! Overlay scale: how large the shop and game-over panels draw relative to the base layout.
//! The 3D view itself always fills the window and ignores this.

pub const DEFAULT_UI_SCALE: f32 = 1.0;
pub const MIN_UI_SCALE: f32 = 0.5;
pub const MAX_UI_SCALE: f32 = 3.0;
pub const UI_SCALE_STEP: f32 = 0.25;

/// Environment variable that overrides the saved scale for one session.
pub const UI_SCALE_ENV: &str = "CRAWL_UI_SCALE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiScaleAction {
    Increase,
    Decrease,
    Reset,
}

impl UiScaleAction {
    pub fn apply(self, current: f32) -> f32 {
        match self {
            Self::Increase => clamp_ui_scale(current + UI_SCALE_STEP),
            Self::Decrease => clamp_ui_scale(current - UI_SCALE_STEP),
            Self::Reset => DEFAULT_UI_SCALE,
        }
    }
}

pub fn clamp_ui_scale(value: f32) -> f32 {
    if !value.is_finite() {
        return DEFAULT_UI_SCALE;
    }
    value.clamp(MIN_UI_SCALE, MAX_UI_SCALE)
}

/// Order of precedence: environment override, saved setting, display DPI, default.
pub fn resolve_ui_scale(
    dpi_scale: f32,
    persisted_ui_scale: Option<f32>,
    ui_scale_override: Option<&str>,
) -> f32 {
    let override_scale =
        ui_scale_override.and_then(|raw| raw.trim().parse::<f32>().ok()).map(clamp_ui_scale);
    if let Some(scale) = override_scale {
        return scale;
    }
    if let Some(scale) = persisted_ui_scale {
        return clamp_ui_scale(scale);
    }
    if dpi_scale.is_finite() && dpi_scale > 1.0 {
        return clamp_ui_scale(dpi_scale);
    }
    DEFAULT_UI_SCALE
}

/// Scales a base pixel size, never below one pixel.
pub fn scaled(base: f32, ui_scale: f32) -> f32 {
    (base * clamp_ui_scale(ui_scale)).max(1.0)
}
