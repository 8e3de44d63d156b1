use bevy::prelude::*;

use crate::components::{CraftConfig, CraftState, PlayerController};
use crate::resources::{CraftControls, FrameClock, WorldBounds};

/// Advance the player craft by one tick.
pub fn craft_physics_system(
    mut query: Query<(&mut CraftState, &CraftConfig), With<PlayerController>>,
    world: Res<WorldBounds>,
    controls: Res<CraftControls>,
    clock: Res<FrameClock>,
) {
    for (mut state, config) in query.iter_mut() {
        update_craft(&mut state, config, &world, &controls, clock.normalized_delta());
    }
}

/// Advance one craft by one tick.
///
/// All velocity terms are fixed impulses per call: the loop normalizes its
/// cadence to the reference frame rate, so `_dt` is part of the signature but
/// deliberately never multiplied in. That keeps behavior exact at the nominal
/// rate and only approximate elsewhere; scaling by `_dt` instead would change
/// the craft's feel and is a behavior change, not a cleanup.
///
/// Stage order matters — each stage feeds the next:
/// rotate, thrust, gravity, integrate, wrap, clamp. A held reset key replaces
/// the whole tick with the canonical pose.
pub fn update_craft(
    state: &mut CraftState,
    config: &CraftConfig,
    world: &WorldBounds,
    controls: &CraftControls,
    _dt: f64,
) {
    // Derived every tick, whatever else happens.
    state.thrusting = controls.thrust;

    if controls.reset {
        state.reset(world);
        return;
    }

    // Constant per-tick turn rate, tuned only by rot_speed.
    state.angle += f64::from(controls.rotation) * config.rot_speed;

    if state.thrusting {
        state.velocity.x += state.angle.cos() * config.thrust;
        state.velocity.y += state.angle.sin() * config.thrust;
    }

    // +y is down in the surface frame.
    state.velocity.y += world.gravity;

    state.position += state.velocity;

    // Wrap horizontally. One step at most: per-tick speeds are assumed to
    // stay below the world width.
    if state.position.x < 0.0 {
        state.position.x += world.width;
    }
    if state.position.x > world.width {
        state.position.x -= world.width;
    }

    // Soft bounce off floor and ceiling. Two separate guards, both checked
    // every tick.
    if state.position.y > world.height - state.size {
        state.position.y = world.height - state.size;
        state.velocity.y *= -config.bounce_restitution;
    }
    if state.position.y < state.size {
        state.position.y = state.size;
        state.velocity.y *= -config.bounce_restitution;
    }
}
