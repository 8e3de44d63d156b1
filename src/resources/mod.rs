pub mod config;
mod input;
mod time;
mod transform;
mod world;

pub use config::{KeyBindings, RenderConfig, SimulationConfig, WorldConfig};
pub use input::{key_identifier, CraftControls};
pub use time::FrameClock;
pub use transform::ScreenTransform;
pub use world::WorldBounds;
