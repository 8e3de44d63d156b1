use bevy::prelude::*;

use crate::resources::config::KeyBindings;

/// The frame's logical control intents, derived from whatever keys are held
/// right now.
///
/// Rebuilt from scratch every tick by `craft_keyboard_system`; a value is
/// never carried across frames. Reset is level-triggered: it stays true for
/// every frame the key is sampled held.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CraftControls {
    pub thrust: bool,
    /// -1 rotate left, +1 rotate right, 0 neutral. Opposing keys held
    /// together cancel.
    pub rotation: i8,
    pub reset: bool,
}

impl CraftControls {
    /// Map a set of held key identifiers to control intents.
    ///
    /// Identifiers are matched case-insensitively against the bindings.
    /// Several physical keys may feed one intent; keys bound to nothing are
    /// ignored.
    pub fn from_held_keys<'a, I>(held: I, bindings: &KeyBindings) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut thrust = false;
        let mut left = false;
        let mut right = false;
        let mut reset = false;

        for key in held {
            thrust |= bindings.thrust.iter().any(|b| b.eq_ignore_ascii_case(key));
            left |= bindings
                .rotate_left
                .iter()
                .any(|b| b.eq_ignore_ascii_case(key));
            right |= bindings
                .rotate_right
                .iter()
                .any(|b| b.eq_ignore_ascii_case(key));
            reset |= bindings.reset.iter().any(|b| b.eq_ignore_ascii_case(key));
        }

        Self {
            thrust,
            rotation: i8::from(right) - i8::from(left),
            reset,
        }
    }
}

/// Canonical lowercase identifier for a key code, `None` for keys the
/// simulation has no name for (they can never match a binding).
pub fn key_identifier(code: KeyCode) -> Option<&'static str> {
    let name = match code {
        KeyCode::ArrowUp => "arrowup",
        KeyCode::ArrowDown => "arrowdown",
        KeyCode::ArrowLeft => "arrowleft",
        KeyCode::ArrowRight => "arrowright",
        KeyCode::Space => "space",
        KeyCode::Enter => "enter",
        KeyCode::Escape => "escape",
        KeyCode::ShiftLeft | KeyCode::ShiftRight => "shift",
        KeyCode::ControlLeft | KeyCode::ControlRight => "control",
        KeyCode::KeyA => "a",
        KeyCode::KeyB => "b",
        KeyCode::KeyC => "c",
        KeyCode::KeyD => "d",
        KeyCode::KeyE => "e",
        KeyCode::KeyF => "f",
        KeyCode::KeyG => "g",
        KeyCode::KeyH => "h",
        KeyCode::KeyI => "i",
        KeyCode::KeyJ => "j",
        KeyCode::KeyK => "k",
        KeyCode::KeyL => "l",
        KeyCode::KeyM => "m",
        KeyCode::KeyN => "n",
        KeyCode::KeyO => "o",
        KeyCode::KeyP => "p",
        KeyCode::KeyQ => "q",
        KeyCode::KeyR => "r",
        KeyCode::KeyS => "s",
        KeyCode::KeyT => "t",
        KeyCode::KeyU => "u",
        KeyCode::KeyV => "v",
        KeyCode::KeyW => "w",
        KeyCode::KeyX => "x",
        KeyCode::KeyY => "y",
        KeyCode::KeyZ => "z",
        KeyCode::Digit0 => "0",
        KeyCode::Digit1 => "1",
        KeyCode::Digit2 => "2",
        KeyCode::Digit3 => "3",
        KeyCode::Digit4 => "4",
        KeyCode::Digit5 => "5",
        KeyCode::Digit6 => "6",
        KeyCode::Digit7 => "7",
        KeyCode::Digit8 => "8",
        KeyCode::Digit9 => "9",
        _ => return None,
    };
    Some(name)
}
