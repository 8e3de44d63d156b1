pub mod input;
pub mod physics;
pub mod render;

pub use input::{craft_keyboard_system, frame_clock_system};
pub use physics::{craft_physics_system, update_craft};
pub use render::{
    craft_render_system, hud_text_system, measure_surface_system, spawn_camera,
    spawn_craft_visuals, spawn_hud,
};
