//! Host error type.

use arena_core::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Tuning file could not be loaded
    #[error("Tuning error: {0}")]
    Config(#[from] ConfigError),

    /// IO error on stdin/stdout
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad command-line arguments
    #[error("Invalid arguments: {0}")]
    Args(String),

    /// The game loop thread died
    #[error("Game loop failed: {0}")]
    GameLoop(String),
}
