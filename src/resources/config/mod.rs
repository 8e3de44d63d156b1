pub mod input;
pub mod render;
pub mod simulation;
pub mod world;

pub use input::KeyBindings;
pub use render::RenderConfig;
pub use simulation::SimulationConfig;
pub use world::WorldConfig;
