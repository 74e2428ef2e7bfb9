//! Keyboard input collection for one rendered frame.

use crawl_app::ui_scale::UiScaleAction;
use crawl_core::{Action, InputState};
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

/// Keys the host handles itself, sampled once per press.
const MENU_KEYS: [KeyCode; 9] = [
    KeyCode::Escape,
    KeyCode::Enter,
    KeyCode::E,
    KeyCode::R,
    KeyCode::M,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
];

const ACTION_BINDINGS: [(Action, &[KeyCode]); 7] = [
    (Action::Forward, &[KeyCode::W, KeyCode::Up]),
    (Action::Back, &[KeyCode::S, KeyCode::Down]),
    (Action::RotateLeft, &[KeyCode::A, KeyCode::Left]),
    (Action::RotateRight, &[KeyCode::D, KeyCode::Right]),
    (Action::Fire, &[KeyCode::Space]),
    (Action::Interact, &[KeyCode::E]),
    (Action::NextWeapon, &[KeyCode::Q, KeyCode::Tab]),
];

#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    /// Held state of every simulation action; the core does its own edge detection.
    pub held: InputState,
    pub toggle_minimap: bool,
    pub ui_scale_action: Option<UiScaleAction>,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed: Vec<KeyCode> =
        MENU_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();

    let mut held = InputState::default();
    for (action, keys) in ACTION_BINDINGS {
        held.set(action, keys.iter().any(|key| is_key_down(*key)));
    }

    let ctrl_down = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    let ui_scale_action = if ctrl_down && is_key_pressed(KeyCode::Equal) {
        Some(UiScaleAction::Increase)
    } else if ctrl_down && is_key_pressed(KeyCode::Minus) {
        Some(UiScaleAction::Decrease)
    } else if ctrl_down && is_key_pressed(KeyCode::Key0) {
        Some(UiScaleAction::Reset)
    } else {
        None
    };

    let toggle_minimap = keys_pressed.contains(&KeyCode::M);
    FrameInput { keys_pressed, held, toggle_minimap, ui_scale_action }
}
