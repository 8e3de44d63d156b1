use bevy::prelude::*;

/// Startup runs in a fixed order: the surface is measured before the craft
/// spawns, and visuals attach to a craft that already exists.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupSet {
    MeasureSurface,
    SpawnCraft,
    SpawnVisuals,
}

/// Per-frame stages. Chained so a frame is always capture, then physics,
/// then render, with no overlap between frames.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SimSet {
    Input,
    Physics,
    Render,
}
