pub mod controller;
pub mod craft;
pub mod render;

pub use controller::PlayerController;
pub use craft::{CraftConfig, CraftState};
pub use render::{HudText, ThrustFlame};
