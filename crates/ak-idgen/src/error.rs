//! Generator errors

use thiserror::Error;

use ak_ids::IdError;

/// Generator error type
#[derive(Error, Debug)]
pub enum GenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error(transparent)]
    Id(#[from] IdError),
}

impl From<toml::de::Error> for GenError {
    fn from(e: toml::de::Error) -> Self {
        GenError::Toml(e.to_string())
    }
}

impl From<toml::ser::Error> for GenError {
    fn from(e: toml::ser::Error) -> Self {
        GenError::Toml(e.to_string())
    }
}

/// Result type alias
pub type GenResult<T> = Result<T, GenError>;
