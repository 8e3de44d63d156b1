use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physical keys bound to each logical intent. Matching is many-to-one and
/// case-insensitive; identifiers use the canonical lowercase names.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    pub thrust: Vec<String>,
    pub rotate_left: Vec<String>,
    pub rotate_right: Vec<String>,
    pub reset: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            thrust: vec!["arrowup".into(), "w".into()],
            rotate_left: vec!["arrowleft".into(), "a".into()],
            rotate_right: vec!["arrowright".into(), "d".into()],
            reset: vec!["r".into()],
        }
    }
}
