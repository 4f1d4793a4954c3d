use std::path::PathBuf;

/// Errors raised by the board when a drop cannot be inserted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column '{0}' does not exist")]
    InvalidColumn(String),

    #[error("column {0} is already full")]
    ColumnFull(char),

    #[error("a drop needs a color (red or yellow)")]
    InvalidColor,
}

/// Errors raised by the game lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("illegal game state: {0}")]
    IllegalState(String),

    #[error("drop rejected: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
