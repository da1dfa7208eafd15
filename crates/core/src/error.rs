//! Error types for the core domain vocabulary

use thiserror::Error;

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while interpreting domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A genre label that is not part of the known taxonomy
    #[error("Unknown genre: '{value}'")]
    UnknownGenre { value: String },
}

impl CoreError {
    /// Creates an unknown genre error for the given label
    pub fn unknown_genre(value: impl Into<String>) -> Self {
        Self::UnknownGenre {
            value: value.into(),
        }
    }
}
