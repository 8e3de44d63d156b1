use bevy::prelude::*;

use crate::components::{CraftConfig, CraftState, PlayerController};
use crate::plugins::{SimSet, StartupSet};
use crate::resources::{CraftControls, FrameClock, SimulationConfig, WorldBounds};
use crate::systems::{craft_keyboard_system, craft_physics_system, frame_clock_system};

/// The simulation core: world bounds, frame clock, input intents and the
/// per-frame physics step for a single keyboard-driven craft.
///
/// Runs headless under `MinimalPlugins`; pairing it with `CraftRenderPlugin`
/// adds the window-facing half.
pub struct CraftPlugin {
    config: SimulationConfig,
}

impl CraftPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    fn setup_craft(mut commands: Commands, world: Res<WorldBounds>, config: CraftConfig) {
        commands.spawn((
            CraftState::at_start(&world, config.size),
            config,
            PlayerController,
            Name::new("craft"),
        ));
        info!("craft spawned at start pose");
    }
}

impl Default for CraftPlugin {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Plugin for CraftPlugin {
    fn build(&self, app: &mut App) {
        // Bounds start from the configured window size; a windowed run
        // replaces them with the measured surface before the craft spawns.
        let bounds = match WorldBounds::new(
            f64::from(self.config.render.screen_width),
            f64::from(self.config.render.screen_height),
            self.config.world.gravity,
        ) {
            Ok(bounds) => bounds,
            Err(e) => {
                error!("invalid world configuration: {e}. Falling back to defaults");
                WorldBounds::default()
            }
        };

        app.insert_resource(bounds)
            .insert_resource(self.config.bindings.clone())
            .init_resource::<CraftControls>()
            .init_resource::<FrameClock>()
            .init_resource::<ButtonInput<KeyCode>>();

        app.configure_sets(
            Startup,
            (
                StartupSet::MeasureSurface,
                StartupSet::SpawnCraft,
                StartupSet::SpawnVisuals,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (SimSet::Input, SimSet::Physics, SimSet::Render).chain(),
        );

        let craft_config = self.config.craft;
        app.add_systems(
            Startup,
            (move |commands: Commands, world: Res<WorldBounds>| {
                Self::setup_craft(commands, world, craft_config)
            })
            .in_set(StartupSet::SpawnCraft),
        );

        app.add_systems(
            Update,
            (
                (frame_clock_system, craft_keyboard_system).in_set(SimSet::Input),
                craft_physics_system.in_set(SimSet::Physics),
            ),
        );
    }
}
