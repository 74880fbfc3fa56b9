use crate::domain::model::RestaurantId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid rating from '{reviewer}': {score} is outside (0, 5]")]
    InvalidRating { reviewer: String, score: f64 },

    #[error("Unknown restaurant: {0}")]
    UnknownRestaurant(RestaurantId),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
