//! Catalog configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use bookshelf_core::{Genre, MAX_NAME_LENGTH};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_name_length`
const NAME_LENGTH_CEILING: usize = 1024;

/// Limits and genre taxonomy of a catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Longest accepted book name, in characters (inclusive)
    pub max_name_length: usize,

    /// Genre labels that may be assigned to a book
    pub genres: Vec<String>,

    /// Subset of `genres` that is safe for children
    pub genres_for_children: Vec<String>,
}

impl CatalogConfig {
    /// Returns true if `genre` is a recognized label
    pub fn is_known_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Returns true if `genre` is recognized and child-safe
    pub fn is_for_children(&self, genre: &str) -> bool {
        self.genres_for_children.iter().any(|g| g == genre)
    }

    /// Overrides the name length limit
    pub fn with_max_name_length(mut self, max: usize) -> Self {
        self.max_name_length = max;
        self
    }

    /// Replaces the genre taxonomy
    pub fn with_genres<I, J, S, T>(mut self, genres: I, for_children: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self.genres_for_children = for_children.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_name_length: MAX_NAME_LENGTH,
            genres: Genre::labels().map(String::from).collect(),
            genres_for_children: Genre::children_labels().map(String::from).collect(),
        }
    }
}

impl ConfigSection for CatalogConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = vec![
            Validator::in_range(
                self.max_name_length,
                1,
                NAME_LENGTH_CEILING,
                "catalog.max_name_length",
            ),
            Validator::non_empty_list(&self.genres, "catalog.genres"),
            Validator::unique(&self.genres, "catalog.genres"),
            Validator::unique(&self.genres_for_children, "catalog.genres_for_children"),
        ];

        for (i, genre) in self.genres.iter().enumerate() {
            results.push(Validator::not_empty(genre, &format!("catalog.genres[{}]", i)));
        }

        for (i, genre) in self.genres_for_children.iter().enumerate() {
            results.push(Validator::one_of(
                genre,
                &self.genres,
                &format!("catalog.genres_for_children[{}]", i),
            ));
        }

        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.max_name_length = other.max_name_length;
        self.genres = other.genres;
        self.genres_for_children = other.genres_for_children;
    }

    fn section_name(&self) -> &'static str {
        "catalog"
    }
}
