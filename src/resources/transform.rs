use bevy::prelude::*;

use crate::resources::WorldBounds;

/// Maps simulation coordinates to the render frame.
///
/// The simulation works in surface coordinates (x right, y down, origin at
/// the top left); bevy renders around a centered origin with y up. Headings
/// rotate the opposite way once the y axis flips, hence the negated z
/// rotation.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ScreenTransform {
    half_width: f32,
    half_height: f32,
}

impl ScreenTransform {
    pub fn new(world: &WorldBounds) -> Self {
        Self {
            half_width: (world.width / 2.0) as f32,
            half_height: (world.height / 2.0) as f32,
        }
    }

    pub fn screen_from_surface(&self, x: f64, y: f64, layer: f32) -> Vec3 {
        Vec3::new(x as f32 - self.half_width, self.half_height - y as f32, layer)
    }

    pub fn rotation_from_heading(&self, angle: f64) -> Quat {
        Quat::from_rotation_z(-angle as f32)
    }
}
