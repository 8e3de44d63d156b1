use serde::{Deserialize, Serialize};

use super::{input::KeyBindings, render::RenderConfig, world::WorldConfig};
use crate::components::CraftConfig;
use crate::utils::SimError;

/// Top-level configuration for a run. Every field has a sensible default, so
/// a missing config file means a default simulation rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SimulationConfig {
    pub world: WorldConfig,
    pub craft: CraftConfig,
    pub render: RenderConfig,
    pub bindings: KeyBindings,
}

impl SimulationConfig {
    pub fn load(path: &str) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.render.screen_width, 800);
        assert_eq!(config.render.screen_height, 600);
        assert_eq!(config.world.gravity, 0.12);
        assert_eq!(config.craft.thrust, 0.22);
        assert_eq!(config.craft.rot_speed, 0.045);
        assert!(config.bindings.thrust.contains(&"w".to_string()));
    }

    #[test]
    fn test_config_save_load() -> Result<(), SimError> {
        let config = SimulationConfig::default();
        let temp_file = NamedTempFile::new()?;
        let path = temp_file.path().to_str().unwrap();

        // Test saving
        config.save(path)?;
        assert!(fs::metadata(path).is_ok());

        // Test loading
        let loaded_config = SimulationConfig::load(path)?;
        assert_eq!(
            loaded_config.render.screen_width,
            config.render.screen_width
        );
        assert_eq!(loaded_config.world.gravity, config.world.gravity);
        assert_eq!(loaded_config.craft.size, config.craft.size);

        Ok(())
    }

    #[test]
    fn test_invalid_config_load() {
        let result = SimulationConfig::load("nonexistent_file.yaml");
        assert!(result.is_err());
    }
}
