use crate::domain::value::ValueKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WunderError {
    #[error("Invalid argument to {function}: {reason}")]
    InvalidArgument {
        function: &'static str,
        reason: String,
    },

    #[error("Expected an array but got {kind}")]
    NotASequence { kind: ValueKind },

    #[error("{function} does not support values of type {kind}")]
    UnsupportedType {
        function: &'static str,
        kind: ValueKind,
    },

    #[error("Worker failed at index {index}: {message}")]
    Worker { index: usize, message: String },

    #[error("Only {completed} of {expected} workers completed before all handles were dropped")]
    Incomplete { completed: usize, expected: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl WunderError {
    pub(crate) fn invalid_argument(function: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            function,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WunderError>;
