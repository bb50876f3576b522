use raylib::prelude::*;

use crate::constants::{KEY_STEP, WHEEL_STEP};
use crate::nav::NavBar;
use crate::render::Letterbox;
use crate::slideshow::Command;

/// Poll raylib for this frame's navigation input.
pub fn poll_commands(rl: &RaylibHandle, nav: &NavBar, letterbox: &Letterbox) -> Vec<Command> {
    let mut commands = Vec::new();

    let wheel = rl.get_mouse_wheel_move();
    if wheel != 0.0 {
        commands.push(Command::ScrollBy(-wheel * WHEEL_STEP));
    }

    if rl.is_key_pressed(KeyboardKey::KEY_DOWN) {
        commands.push(Command::ScrollBy(KEY_STEP));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_UP) {
        commands.push(Command::ScrollBy(-KEY_STEP));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_PAGE_DOWN) || rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        commands.push(Command::NextSlide);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_PAGE_UP) {
        commands.push(Command::PreviousSlide);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_HOME) {
        commands.push(Command::FirstSlide);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_END) {
        commands.push(Command::LastSlide);
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        if let Some(point) = letterbox.to_render_space(rl.get_mouse_position()) {
            if let Some(index) = nav.hit_test(point) {
                commands.push(Command::NavigateTo(index));
            }
        }
    }

    commands
}
