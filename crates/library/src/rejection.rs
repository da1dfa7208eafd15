//! Reasons a catalog declines a change

use thiserror::Error;

/// Why a mutation left the catalog unchanged
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("book name is empty")]
    EmptyName,

    #[error("book name is {length} characters long, the limit is {max}")]
    NameTooLong { length: usize, max: usize },

    #[error("book '{0}' is already in the catalog")]
    DuplicateBook(String),

    #[error("book '{0}' is not in the catalog")]
    UnknownBook(String),

    #[error("genre '{0}' is not recognized")]
    UnknownGenre(String),

    #[error("book '{0}' is already a favorite")]
    AlreadyFavorite(String),

    #[error("book '{0}' is not a favorite")]
    NotFavorite(String),
}
