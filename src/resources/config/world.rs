use serde::{Deserialize, Serialize};

/// Environment constants that do not depend on the surface size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Downward velocity impulse applied to the craft every tick.
    pub gravity: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { gravity: 0.12 }
    }
}
