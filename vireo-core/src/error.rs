use thiserror::Error;

/// Errors surfaced by the vireo core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Engine command failed: {0}")]
    Engine(String),

    #[error("Watchlist fetch failed: {0}")]
    Fetch(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
