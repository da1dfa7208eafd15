//! Serializable view of a catalog

use crate::error::LibraryResult;
use bookshelf_core::Book;
use serde::{Deserialize, Serialize};

/// Books and favorites at one point in time, in insertion order
///
/// Meant for display and export. A snapshot cannot be loaded back into a
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub books: Vec<Book>,
    pub favorites: Vec<String>,
}

impl CatalogSnapshot {
    /// Pretty-printed JSON
    pub fn to_json_pretty(&self) -> LibraryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::Catalog;

    #[test]
    fn test_snapshot_preserves_order() {
        let mut catalog = Catalog::new();
        catalog.add_new_book("Б");
        catalog.add_new_book("А");
        catalog.set_book_genre("А", "Комедии");
        catalog.add_book_in_favorites("А");
        catalog.add_book_in_favorites("Б");

        let snapshot = catalog.snapshot();
        let names: Vec<_> = snapshot.books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Б", "А"]);
        assert_eq!(snapshot.favorites, vec!["А", "Б"]);
        assert!(snapshot.books.iter().all(|b| b.is_favorite));
    }

    #[test]
    fn test_snapshot_json() {
        let mut catalog = Catalog::new();
        catalog.add_new_book("Дюна");
        catalog.set_book_genre("Дюна", "Фантастика");

        let json = catalog.snapshot().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["books"][0]["name"], "Дюна");
        assert_eq!(value["books"][0]["genre"], "Фантастика");
        assert_eq!(value["books"][0]["is_favorite"], false);
        assert_eq!(value["favorites"].as_array().map(Vec::len), Some(0));
    }
}
