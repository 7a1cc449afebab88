use thiserror::Error;
use serde::Serialize;

/// Returned by a feature when an action belongs to some other feature.
/// The registry skips these and keeps looking.
pub const ERR_UNSUPPORTED_ACTION: &str = "Unsupported action type";

#[derive(Error, Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Clipboard Error: {0}")]
    Clipboard(String),

    #[error("Feature Error: {0}")]
    Feature(String),

    #[error("{}", ERR_UNSUPPORTED_ACTION)]
    Unsupported,

    #[error("Unknown Error: {0}")]
    Unknown(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("Serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
