use approx::assert_relative_eq;
use bevy::prelude::KeyCode;
use std::f64::consts::FRAC_PI_2;

use hopper::resources::{CraftControls, WorldBounds};

mod common;
use common::{assert_craft_state_valid, TestAppBuilder};

#[test]
fn craft_spawns_at_canonical_pose() {
    // Zero gravity freezes the frame: with no input and no velocity the
    // pose observed after startup is exactly the spawn pose.
    let mut app = TestAppBuilder::new().with_gravity(0.0).build();

    let craft = app.craft();
    let world = app.get_state::<WorldBounds>().unwrap();

    assert_relative_eq!(craft.position.x, 0.2 * world.width);
    assert_relative_eq!(craft.position.y, 0.5 * world.height);
    assert_relative_eq!(craft.angle, -FRAC_PI_2);
    assert_relative_eq!(craft.velocity.x, 0.0);
    assert_relative_eq!(craft.velocity.y, 0.0);
    assert_craft_state_valid(&craft, &world);
}

#[test]
fn craft_descends_under_gravity() {
    let mut app = TestAppBuilder::new().build();
    let start = app.craft();

    app.run_steps(60);

    let craft = app.craft();
    assert_relative_eq!(
        craft.velocity.y - start.velocity.y,
        60.0 * 0.12,
        epsilon = 1e-9
    );
    assert!(craft.position.y > start.position.y);
    assert_craft_state_valid(&craft, &app.get_state::<WorldBounds>().unwrap());
}

#[test]
fn thrust_key_drives_the_craft_upward() {
    let mut app = TestAppBuilder::new().build();
    let start = app.craft();

    app.press(KeyCode::KeyW);
    app.run_steps(10);

    let craft = app.craft();
    assert!(craft.thrusting);
    // Nose up: each tick adds thrust (0.22, up) and gravity (0.12, down).
    assert_relative_eq!(
        craft.velocity.y - start.velocity.y,
        10.0 * (-0.22 + 0.12),
        epsilon = 1e-9
    );
}

#[test]
fn arrow_thrust_binding_matches_letter_binding() {
    let mut with_arrow = TestAppBuilder::new().build();
    with_arrow.press(KeyCode::ArrowUp);
    with_arrow.run_steps(5);

    let mut with_letter = TestAppBuilder::new().build();
    with_letter.press(KeyCode::KeyW);
    with_letter.run_steps(5);

    assert_relative_eq!(
        with_arrow.craft().velocity.y,
        with_letter.craft().velocity.y
    );
}

#[test]
fn rotation_key_turns_at_a_constant_rate() {
    let mut app = TestAppBuilder::new().build();

    app.press(KeyCode::KeyD);
    app.run_steps(10);

    assert_relative_eq!(app.craft().angle, -FRAC_PI_2 + 10.0 * 0.045, epsilon = 1e-12);
}

#[test]
fn opposing_rotation_keys_cancel() {
    let mut app = TestAppBuilder::new().build();

    app.press(KeyCode::KeyA);
    app.press(KeyCode::ArrowRight);
    app.run_steps(10);

    assert_relative_eq!(app.craft().angle, -FRAC_PI_2);
}

#[test]
fn reset_key_restores_the_canonical_pose() {
    let mut app = TestAppBuilder::new().build();
    let world = app.get_state::<WorldBounds>().unwrap();

    app.press(KeyCode::KeyW);
    app.press(KeyCode::KeyD);
    app.run_steps(40);
    app.release(KeyCode::KeyW);
    app.release(KeyCode::KeyD);
    assert!((app.craft().position.x - 0.2 * world.width).abs() > 1.0);

    app.press(KeyCode::KeyR);
    app.run_steps(1);

    let craft = app.craft();
    assert_relative_eq!(craft.position.x, 0.2 * world.width);
    assert_relative_eq!(craft.position.y, 0.5 * world.height);
    assert_relative_eq!(craft.velocity.x, 0.0);
    assert_relative_eq!(craft.velocity.y, 0.0);
    assert_relative_eq!(craft.angle, -FRAC_PI_2);

    // Held reset pins the craft to the pose; releasing frees it again.
    app.run_steps(5);
    assert_relative_eq!(app.craft().velocity.y, 0.0);
    app.release(KeyCode::KeyR);
    app.run_steps(1);
    assert_relative_eq!(app.craft().velocity.y, 0.12, epsilon = 1e-12);
}

#[test]
fn controls_are_rebuilt_every_frame() {
    let mut app = TestAppBuilder::new().build();

    app.press(KeyCode::KeyW);
    app.run_steps(1);
    assert!(app.get_state::<CraftControls>().unwrap().thrust);

    app.release(KeyCode::KeyW);
    app.run_steps(1);
    assert!(!app.get_state::<CraftControls>().unwrap().thrust);
}

#[test]
fn headless_world_keeps_configured_bounds() {
    let app = TestAppBuilder::new().with_gravity(0.2).build();
    let world = app.get_state::<WorldBounds>().unwrap();

    assert_relative_eq!(world.width, 800.0);
    assert_relative_eq!(world.height, 600.0);
    assert_relative_eq!(world.gravity, 0.2);
}

#[test]
fn long_fall_settles_on_the_floor() {
    let mut app = TestAppBuilder::new().build();

    app.run_steps(2000);

    let craft = app.craft();
    let world = app.get_state::<WorldBounds>().unwrap();
    assert_craft_state_valid(&craft, &world);
    // Bounces decay; the craft ends resting near the floor band.
    assert!(craft.position.y > world.height * 0.8);
}
