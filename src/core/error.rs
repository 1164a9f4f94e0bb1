use thiserror::Error;

use crate::core::types::{ActorId, ItemId, Position};

#[derive(Error, Debug)]
pub enum KeepError {
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Location {0} is already occupied by {1:?}")]
    Occupied(Position, ActorId),

    #[error("Location {0} blocks movement")]
    Blocked(Position),

    #[error("Position {0} is outside the map")]
    OutOfBounds(Position),

    #[error("Actor not found: {0:?}")]
    ActorNotFound(ActorId),

    #[error("Item not found: {0:?}")]
    ItemNotFound(ItemId),

    #[error("No actors left to take a turn")]
    NoActors,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KeepError>;
