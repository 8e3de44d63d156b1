use bevy::prelude::*;

/// Marker for the flame segment drawn behind the craft while thrusting.
#[derive(Component, Debug, Default)]
pub struct ThrustFlame;

/// Marker for the velocity readout overlay.
#[derive(Component, Debug, Default)]
pub struct HudText;
