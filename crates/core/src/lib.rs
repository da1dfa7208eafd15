//! Shared domain vocabulary for the bookshelf catalog.
//!
//! Holds the genre taxonomy, the book record handed out by catalog views and
//! the name length limits every catalog enforces by default.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{name_length, Book, Genre, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
