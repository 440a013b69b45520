//! Application layer errors

use thiserror::Error;

use crate::domain::entities::CommandKind;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for BotError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            BotError::Parse(e.to_string())
        } else {
            BotError::Network(e.to_string())
        }
    }
}

/// Request-level command errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Missing argument for {0}: usage {}", .0.usage())]
    MissingArgument(CommandKind),

    #[error("Missing message")]
    EmptyMessage,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
