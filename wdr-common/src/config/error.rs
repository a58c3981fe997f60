use std::io::Error as IoError;

use serde_json::Error as SerdeJsonError;
use thiserror::Error as ThisError;
use wdr_core::error::InvalidConfig;

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] IoError),

    #[error("serialization error: {0}")]
    Serialization(#[from] SerdeJsonError),

    #[error("config must be a JSON object")]
    NotAnObject,

    #[error("invalid config: {0}")]
    Invalid(#[from] InvalidConfig),

    #[error("cannot determine executable directory")]
    NoExecutableDirectory,
}
