//! Error types for curlex

use thiserror::Error;

/// Main error type for curlex
///
/// Only [`CurlexError::NotCurl`] and [`CurlexError::UnknownLanguage`] come
/// out of the engine itself. The rest belong to the command-line front end.
#[derive(Error, Debug)]
pub enum CurlexError {
    #[error("Not a curl command")]
    NotCurl,

    #[error("Unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, CurlexError>;
