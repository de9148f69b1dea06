//! Error types for the multicomplete engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render contract violated: {0}")]
    RenderContract(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Marker pattern error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
