use bevy::prelude::*;

use crate::resources::{key_identifier, CraftControls, FrameClock, KeyBindings};

/// Rebuild the frame's control intents from the held-key set.
///
/// Overwrites the whole resource every frame, so stale intents from an
/// earlier frame can never leak into the physics step.
pub fn craft_keyboard_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut controls: ResMut<CraftControls>,
) {
    let held = keyboard
        .get_pressed()
        .filter_map(|code| key_identifier(*code));
    *controls = CraftControls::from_held_keys(held, &bindings);
}

/// Advance the frame clock from the host's elapsed wall time.
pub fn frame_clock_system(time: Res<Time>, mut clock: ResMut<FrameClock>) {
    clock.advance(time.delta());
}
