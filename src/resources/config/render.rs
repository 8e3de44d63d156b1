use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Window and overlay settings. The window resolution is only the requested
/// size; the world takes its bounds from whatever surface the host actually
/// provides.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub vsync: bool,
    pub hud_font_size: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            vsync: true,
            hud_font_size: 14.0,
        }
    }
}
