use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("World error: {0}")]
    WorldError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("Render error: {0}")]
    RenderError(String),
}
