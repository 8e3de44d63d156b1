use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::SimError;

/// Fixed constants of the simulation surface: its extent and the downward
/// acceleration applied every tick.
///
/// Created once at startup and never mutated afterwards. In a windowed run
/// the width and height come from the measured surface; headless harnesses
/// insert the resource directly.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
    /// Per-tick velocity impulse, +y (down) in the surface frame.
    pub gravity: f64,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            gravity: 0.12,
        }
    }
}

impl WorldBounds {
    pub fn new(width: f64, height: f64, gravity: f64) -> Result<Self, SimError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(SimError::WorldError(format!(
                "bounds must be positive, got {width}x{height}"
            )));
        }
        if gravity < 0.0 {
            return Err(SimError::WorldError(format!(
                "gravity must be non-negative, got {gravity}"
            )));
        }
        Ok(Self {
            width,
            height,
            gravity,
        })
    }
}
