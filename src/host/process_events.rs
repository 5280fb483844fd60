use raylib::prelude::*;

use dungeon_caster::InputState;
use dungeon_caster::core::player::Intents;

const DEBUG_KEY: KeyboardKey = KeyboardKey::KEY_D;

/// Arrow keys are sampled as held state; the debug key only on its press edge.
pub fn process_events(window: &RaylibHandle) -> InputState {
    InputState {
        intents: Intents {
            forward: window.is_key_down(KeyboardKey::KEY_UP),
            backward: window.is_key_down(KeyboardKey::KEY_DOWN),
            turn_left: window.is_key_down(KeyboardKey::KEY_LEFT),
            turn_right: window.is_key_down(KeyboardKey::KEY_RIGHT),
        },
        toggle_debug: window.is_key_pressed(DEBUG_KEY),
    }
}
