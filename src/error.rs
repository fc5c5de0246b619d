use std::io;
use thiserror::Error;

/// Raised when committed channel text is not a number in `[0, 255]`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidChannelInput {
    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("{0} is outside 0 to 255")]
    OutOfRange(f64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
