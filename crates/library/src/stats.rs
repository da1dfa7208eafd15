//! Catalog statistics

use crate::catalog::Catalog;
use serde::Serialize;

/// Counts describing a catalog at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_books: usize,
    pub books_without_genre: usize,
    pub books_for_children: usize,
    pub favorite_count: usize,
    /// Books per genre, in configured genre order, zero counts included
    pub per_genre: Vec<(String, usize)>,
}

impl CatalogStats {
    pub(crate) fn collect(catalog: &Catalog) -> Self {
        let books = catalog.get_books_genre();

        let per_genre = catalog
            .known_genres()
            .iter()
            .map(|genre| {
                let count = books.values().filter(|g| *g == genre).count();
                (genre.clone(), count)
            })
            .collect();

        Self {
            total_books: books.len(),
            books_without_genre: books.values().filter(|g| g.is_empty()).count(),
            books_for_children: catalog.get_books_for_children().len(),
            favorite_count: catalog.get_list_of_favorites_books().len(),
            per_genre,
        }
    }

    /// Number of books filed under `genre`
    pub fn count_for(&self, genre: &str) -> usize {
        self.per_genre
            .iter()
            .find(|(g, _)| g == genre)
            .map_or(0, |(_, count)| *count)
    }
}
