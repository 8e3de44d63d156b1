use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::resources::WorldBounds;

/// Start pose, as fractions of the world bounds. The craft spawns a fifth of
/// the way in from the left edge, vertically centered, nose up.
const START_X_FRACTION: f64 = 0.2;
const START_Y_FRACTION: f64 = 0.5;
const START_ANGLE: f64 = -FRAC_PI_2;

/// Tunable parameters for a craft.
///
/// Thrust and rotation rate are per-tick quantities: the simulation applies
/// them once per normalized frame rather than scaling them by elapsed time.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CraftConfig {
    /// Half-length scale of the body, in surface units. Used for rendering
    /// and for the vertical boundary collision.
    pub size: f64,
    /// Velocity impulse added along the heading each tick while thrusting.
    pub thrust: f64,
    /// Heading change per tick at full rotation input (radians).
    pub rot_speed: f64,
    /// Fraction of vertical speed retained (and reversed) on a floor or
    /// ceiling hit.
    pub bounce_restitution: f64,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            size: 16.0,
            thrust: 0.22,
            rot_speed: 0.045,
            bounce_restitution: 0.4,
        }
    }
}

/// State of the simulated craft.
///
/// Positions are in the surface frame: x right, y down, origin at the top
/// left, matching the drawing surface. The heading angle accumulates without
/// wraparound; everything downstream of it is periodic.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CraftState {
    /// Position in surface units.
    pub position: Vector2<f64>,
    /// Velocity in surface units per tick.
    pub velocity: Vector2<f64>,
    /// Heading in radians; 0 points right, negative is up.
    pub angle: f64,
    /// Derived from the frame's controls every tick; never authoritative.
    pub thrusting: bool,
    /// Half-length scale, fixed for the craft's lifetime.
    pub size: f64,
}

impl CraftState {
    /// Create a craft at the canonical start pose for the given world.
    pub fn at_start(world: &WorldBounds, size: f64) -> Self {
        Self {
            position: Vector2::new(
                world.width * START_X_FRACTION,
                world.height * START_Y_FRACTION,
            ),
            velocity: Vector2::zeros(),
            angle: START_ANGLE,
            thrusting: false,
            size,
        }
    }

    /// Restore the canonical start pose: position, velocity and heading
    /// only. Size and the derived thrusting flag are left alone.
    pub fn reset(&mut self, world: &WorldBounds) {
        self.position.x = world.width * START_X_FRACTION;
        self.position.y = world.height * START_Y_FRACTION;
        self.velocity = Vector2::zeros();
        self.angle = START_ANGLE;
    }
}
