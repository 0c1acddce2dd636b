//! Error types for identifier loading and validation

use thiserror::Error;

use crate::id::AkUniqueId;

/// Identifier error type
#[derive(Error, Debug)]
pub enum IdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Value out of range at line {line}: {value} does not fit in 32 bits")]
    ValueOutOfRange { line: usize, value: String },

    #[error("Group {group} has no GROUP id")]
    MissingGroupId { group: String },

    #[error("Empty name in {scope}")]
    EmptyName { scope: String },

    #[error("Invalid symbol {name:?} in {scope}")]
    InvalidSymbol { scope: String, name: String },

    #[error("Duplicate name {name} in {scope}")]
    DuplicateName { scope: String, name: String },

    #[error("Id collision in {scope}: {first} and {second} both map to {id}")]
    IdCollision {
        scope: String,
        first: String,
        second: String,
        id: AkUniqueId,
    },

    #[error("Hash mismatch for {name} in {scope}: expected {expected}, found {actual}")]
    HashMismatch {
        scope: String,
        name: String,
        expected: AkUniqueId,
        actual: AkUniqueId,
    },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Result type alias
pub type IdResult<T> = Result<T, IdError>;
