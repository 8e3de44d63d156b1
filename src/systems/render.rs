use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;
use bevy::window::PrimaryWindow;

use crate::components::{CraftState, HudText, PlayerController, ThrustFlame};
use crate::resources::{RenderConfig, ScreenTransform, WorldBounds};

const CRAFT_LAYER: f32 = 1.0;
const FLAME_WIDTH: f32 = 3.0;

/// Measure the drawing surface and fix the world bounds from it.
///
/// This runs once, before the craft spawns. Without a surface there is
/// nothing to simulate against, so startup is refused rather than degraded.
pub fn measure_surface_system(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    bounds: Res<WorldBounds>,
    mut exit: EventWriter<AppExit>,
) {
    let Ok(window) = windows.get_single() else {
        error!("no primary window; refusing to start");
        exit.send(AppExit::error());
        return;
    };

    match WorldBounds::new(
        f64::from(window.width()),
        f64::from(window.height()),
        bounds.gravity,
    ) {
        Ok(measured) => {
            info!(
                "surface measured at {}x{}",
                measured.width, measured.height
            );
            commands.insert_resource(ScreenTransform::new(&measured));
            commands.insert_resource(measured);
        }
        Err(e) => {
            error!("surface reported a degenerate size: {e}");
            exit.send(AppExit::error());
        }
    }
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Attach the body mesh and flame segment to any craft that does not have
/// them yet.
pub fn spawn_craft_visuals(
    mut commands: Commands,
    query: Query<(Entity, &CraftState), (With<PlayerController>, Without<Mesh2d>)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (entity, state) in query.iter() {
        let size = state.size as f32;
        commands
            .entity(entity)
            .insert((
                Mesh2d(meshes.add(craft_body_mesh(size))),
                MeshMaterial2d(materials.add(Color::srgb_u8(0x16, 0xc1, 0xff))),
                Transform::from_xyz(0.0, 0.0, CRAFT_LAYER),
                Visibility::default(),
            ))
            .with_children(|parent| {
                // Flame segment from 0.6 to 1.0 body lengths behind the nose,
                // hidden until the craft thrusts.
                parent.spawn((
                    ThrustFlame,
                    Mesh2d(meshes.add(Rectangle::new(0.4 * size, FLAME_WIDTH))),
                    MeshMaterial2d(materials.add(Color::srgb_u8(0xff, 0xcc, 0x66))),
                    Transform::from_xyz(-0.8 * size, 0.0, -0.1),
                    Visibility::Hidden,
                ));
            });
    }
}

pub fn spawn_hud(mut commands: Commands, config: Res<RenderConfig>) {
    commands.spawn((
        HudText,
        Text::new("vx: 0.00  vy: 0.00"),
        TextFont {
            font_size: config.hud_font_size,
            ..default()
        },
        TextColor(Color::srgb_u8(0xe8, 0xee, 0xfc)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(6.0),
            ..default()
        },
    ));
}

/// Sync the craft's render transform and flame visibility from its state.
pub fn craft_render_system(
    transform_res: Option<Res<ScreenTransform>>,
    mut query: Query<(&CraftState, &mut Transform), With<PlayerController>>,
    mut flames: Query<&mut Visibility, With<ThrustFlame>>,
) {
    let Some(transform_res) = transform_res else {
        return;
    };

    for (state, mut transform) in query.iter_mut() {
        transform.translation =
            transform_res.screen_from_surface(state.position.x, state.position.y, CRAFT_LAYER);
        transform.rotation = transform_res.rotation_from_heading(state.angle);

        for mut visibility in flames.iter_mut() {
            *visibility = if state.thrusting {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
        }
    }
}

/// Refresh the velocity readout.
pub fn hud_text_system(
    craft: Query<&CraftState, With<PlayerController>>,
    mut hud: Query<&mut Text, With<HudText>>,
) {
    let Ok(state) = craft.get_single() else {
        return;
    };
    for mut text in hud.iter_mut() {
        text.0 = format!(
            "vx: {:.2}  vy: {:.2}",
            state.velocity.x, state.velocity.y
        );
    }
}

/// Body polygon in the render frame (y up): nose at +x, two tail points and
/// a notch between them. Triangulated as a fan from the nose.
fn craft_body_mesh(size: f32) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(
        Mesh::ATTRIBUTE_POSITION,
        vec![
            [size, 0.0, 0.0],
            [-0.6 * size, 0.7 * size, 0.0],
            [-0.2 * size, 0.0, 0.0],
            [-0.6 * size, -0.7 * size, 0.0],
        ],
    );
    mesh.insert_attribute(
        Mesh::ATTRIBUTE_UV_0,
        vec![[1.0, 0.5], [0.0, 0.0], [0.25, 0.5], [0.0, 1.0]],
    );
    mesh.insert_indices(Indices::U32(vec![0, 1, 2, 0, 2, 3]));
    mesh
}
