use bevy::prelude::*;

use crate::plugins::{SimSet, StartupSet};
use crate::resources::RenderConfig;
use crate::systems::{
    craft_render_system, hud_text_system, measure_surface_system, spawn_camera,
    spawn_craft_visuals, spawn_hud,
};

/// The window-facing half of the simulation: surface measurement, camera,
/// craft visuals, HUD, and the per-frame render sync. Requires `CraftPlugin`.
pub struct CraftRenderPlugin {
    config: RenderConfig,
}

impl CraftRenderPlugin {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl Default for CraftRenderPlugin {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Plugin for CraftRenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());

        app.add_systems(
            Startup,
            (
                measure_surface_system.in_set(StartupSet::MeasureSurface),
                (spawn_camera, spawn_hud, spawn_craft_visuals).in_set(StartupSet::SpawnVisuals),
            ),
        );

        app.add_systems(
            Update,
            (craft_render_system, hud_text_system).in_set(SimSet::Render),
        );
    }
}
