use hopper::components::CraftState;
use hopper::resources::WorldBounds;

/// Assert that a craft state is well-formed: finite numbers, positive size,
/// and a vertical position inside the clamped band.
pub fn assert_craft_state_valid(state: &CraftState, world: &WorldBounds) {
    assert!(state.position.x.is_finite(), "x is not finite");
    assert!(state.position.y.is_finite(), "y is not finite");
    assert!(state.velocity.x.is_finite(), "vx is not finite");
    assert!(state.velocity.y.is_finite(), "vy is not finite");
    assert!(state.angle.is_finite(), "angle is not finite");
    assert!(state.size > 0.0, "size must be positive");
    assert!(
        state.position.y >= state.size && state.position.y <= world.height - state.size,
        "y = {} escaped the clamped band",
        state.position.y
    );
}
