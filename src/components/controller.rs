use bevy::prelude::*;

/// Marker for the craft driven by keyboard input.
#[derive(Component, Debug, Default)]
pub struct PlayerController;
