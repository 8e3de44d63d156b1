use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use std::path::Path;

use hopper::plugins::{CraftPlugin, CraftRenderPlugin};
use hopper::resources::SimulationConfig;
use hopper::utils::SimError;

const CONFIG_PATH: &str = "hopper.yaml";

fn main() -> Result<(), SimError> {
    // A missing config file means defaults; a malformed one refuses startup.
    let config = if Path::new(CONFIG_PATH).exists() {
        SimulationConfig::load(CONFIG_PATH)?
    } else {
        SimulationConfig::default()
    };

    let present_mode = if config.render.vsync {
        PresentMode::AutoVsync
    } else {
        PresentMode::AutoNoVsync
    };

    let exit = App::new()
        .insert_resource(ClearColor(Color::srgb_u8(0x0b, 0x10, 0x20)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "hopper".into(),
                resolution: WindowResolution::new(
                    config.render.screen_width as f32,
                    config.render.screen_height as f32,
                ),
                resizable: false,
                present_mode,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(CraftRenderPlugin::new(config.render.clone()))
        .add_plugins(CraftPlugin::new(config))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(_) => Err(SimError::RenderError(
            "application exited with an error".into(),
        )),
    }
}
