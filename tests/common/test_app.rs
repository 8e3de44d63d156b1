use bevy::prelude::*;

use hopper::components::CraftState;
use hopper::plugins::CraftPlugin;
use hopper::resources::SimulationConfig;

/// Builder for a headless simulation app: `MinimalPlugins` plus the core
/// plugin, no window. Keys are pressed directly on the `ButtonInput`
/// resource.
pub struct TestAppBuilder {
    config: SimulationConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    #[allow(dead_code)]
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.config.world.gravity = gravity;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(CraftPlugin::new(self.config));

        // Run an initial update so startup systems spawn the craft.
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    pub fn get_state<T: Resource + Clone>(&self) -> Option<T> {
        self.app.world().get_resource::<T>().cloned()
    }

    pub fn craft(&mut self) -> CraftState {
        let world = self.app.world_mut();
        let mut query = world.query::<&CraftState>();
        *query
            .get_single(world)
            .expect("craft entity not found")
    }
}
