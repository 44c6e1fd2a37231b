use macroquad::prelude::{is_key_down, is_key_pressed, is_quit_requested, KeyCode};

use manlab_core::Buttons;

pub struct FrameInput {
    pub quit: bool,
    /// T was pressed this frame.
    pub dump_velocity: bool,
    pub buttons: Buttons,
}

/// Fixed key map.
pub fn held_buttons(down: impl Fn(KeyCode) -> bool) -> Buttons {
    let mut buttons = Buttons::empty();
    for (key, button) in [
        (KeyCode::A, Buttons::LEFT),
        (KeyCode::D, Buttons::RIGHT),
        (KeyCode::Space, Buttons::JUMP),
        (KeyCode::L, Buttons::ATTACK),
        (KeyCode::R, Buttons::RESET),
    ] {
        if down(key) {
            buttons |= button;
        }
    }
    buttons
}

/// Escape both quits and dumps velocities, so the last state is logged on
/// the way out.
pub fn frame_input(
    quit_requested: bool,
    pressed: impl Fn(KeyCode) -> bool,
    down: impl Fn(KeyCode) -> bool,
) -> FrameInput {
    let escape = pressed(KeyCode::Escape);
    FrameInput {
        quit: quit_requested || escape,
        dump_velocity: escape || pressed(KeyCode::T),
        buttons: held_buttons(down),
    }
}

pub fn poll() -> FrameInput {
    frame_input(is_quit_requested(), is_key_pressed, is_key_down)
}
