mod renderer;

pub use renderer::CraftRenderer;
