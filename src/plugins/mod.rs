mod craft;
mod render;
mod staging;

pub use craft::CraftPlugin;
pub use render::CraftRenderPlugin;
pub use staging::{SimSet, StartupSet};
