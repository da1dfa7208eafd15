//! Book record and name rules

use serde::{Deserialize, Serialize};

/// Shortest name a catalog accepts by default, in characters
pub const MIN_NAME_LENGTH: usize = 1;

/// Longest name a catalog accepts by default, in characters
pub const MAX_NAME_LENGTH: usize = 40;

/// Length of a book name in characters
///
/// Names are arbitrary text, so the limit counts Unicode scalar values,
/// never bytes.
pub fn name_length(name: &str) -> usize {
    name.chars().count()
}

/// A book as seen through a catalog view
///
/// The name is the book's identity. An empty genre means no genre has been
/// assigned yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    pub genre: String,
    pub is_favorite: bool,
}

impl Book {
    /// Creates a book with no genre that is not a favorite
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: String::new(),
            is_favorite: false,
        }
    }

    /// Sets the genre label
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Marks the book as a favorite
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.is_favorite = favorite;
        self
    }

    /// Returns true if a genre has been assigned
    pub fn has_genre(&self) -> bool {
        !self.genre.is_empty()
    }
}
