use macroquad::prelude::*;

use crate::application::Simulation;

/// Whether the user asked to leave
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Q) || is_key_pressed(KeyCode::Escape)
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::reseed),
        (KeyCode::N, Simulation::step),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
