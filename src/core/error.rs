use thiserror::Error;

use crate::core::types::PersonId;

#[derive(Error, Debug)]
pub enum CalliopeError {
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),

    #[error("Pattern is missing the '{0}' distribution")]
    MissingDistribution(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalliopeError>;
