//! The book catalog

use crate::error::LibraryResult;
use crate::rejection::Rejection;
use crate::snapshot::CatalogSnapshot;
use crate::stats::CatalogStats;
use bookshelf_config::{CatalogConfig, ConfigManager, ConfigSection};
use bookshelf_core::{name_length, Book, MIN_NAME_LENGTH};
use indexmap::{IndexMap, IndexSet};
use log::debug;

/// In-memory catalog of books, their genres and a favorites list
///
/// Book names are unique and kept in insertion order. A freshly added book has
/// an empty genre. Favorites are always a subset of the catalog's books.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
    genre_by_book: IndexMap<String, String>,
    favorites: IndexSet<String>,
}

impl Catalog {
    /// Creates an empty catalog with the default limits and genres
    pub fn new() -> Self {
        Self::from_valid_config(CatalogConfig::default())
    }

    /// Creates an empty catalog with custom limits and genres
    ///
    /// Fails if the configuration does not validate.
    pub fn with_config(config: CatalogConfig) -> LibraryResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Creates an empty catalog from the managed config file and environment
    pub fn from_manager(manager: &ConfigManager) -> LibraryResult<Self> {
        let config = manager.load_with_env_overrides()?;
        Self::with_config(config.catalog)
    }

    fn from_valid_config(config: CatalogConfig) -> Self {
        Self {
            config,
            genre_by_book: IndexMap::new(),
            favorites: IndexSet::new(),
        }
    }

    /// Limits and genres this catalog enforces
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Genre labels that may be assigned
    pub fn known_genres(&self) -> &[String] {
        &self.config.genres
    }

    /// Number of books
    pub fn len(&self) -> usize {
        self.genre_by_book.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genre_by_book.is_empty()
    }

    pub fn contains_book(&self, name: &str) -> bool {
        self.genre_by_book.contains_key(name)
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.contains(name)
    }

    /// Adds a book with no genre
    ///
    /// Names outside `1..=max_name_length` characters and names already in
    /// the catalog are ignored.
    pub fn add_new_book(&mut self, name: &str) {
        declined("add_new_book", self.try_add_new_book(name));
    }

    /// Adds a book with no genre, reporting why it was declined
    pub fn try_add_new_book(&mut self, name: &str) -> Result<(), Rejection> {
        let length = name_length(name);
        if length < MIN_NAME_LENGTH {
            return Err(Rejection::EmptyName);
        }
        if length > self.config.max_name_length {
            return Err(Rejection::NameTooLong {
                length,
                max: self.config.max_name_length,
            });
        }
        if self.genre_by_book.contains_key(name) {
            return Err(Rejection::DuplicateBook(name.to_string()));
        }

        self.genre_by_book.insert(name.to_string(), String::new());
        Ok(())
    }

    /// Assigns a genre to a book
    ///
    /// Ignored if the book is not in the catalog or the genre is not a known
    /// label; the previous genre stays in place.
    pub fn set_book_genre(&mut self, name: &str, genre: &str) {
        declined("set_book_genre", self.try_set_book_genre(name, genre));
    }

    /// Assigns a genre to a book, reporting why it was declined
    pub fn try_set_book_genre(&mut self, name: &str, genre: &str) -> Result<(), Rejection> {
        let Some(slot) = self.genre_by_book.get_mut(name) else {
            return Err(Rejection::UnknownBook(name.to_string()));
        };
        if !self.config.is_known_genre(genre) {
            return Err(Rejection::UnknownGenre(genre.to_string()));
        }

        *slot = genre.to_string();
        Ok(())
    }

    /// Genre of a book
    ///
    /// `Some("")` means the book exists without a genre; `None` means there is
    /// no such book.
    pub fn get_book_genre(&self, name: &str) -> Option<&str> {
        self.genre_by_book.get(name).map(String::as_str)
    }

    /// Every book and its genre, in insertion order
    pub fn get_books_genre(&self) -> &IndexMap<String, String> {
        &self.genre_by_book
    }

    /// Books filed under `genre`, in insertion order
    pub fn get_books_with_specific_genre(&self, genre: &str) -> Vec<&str> {
        self.genre_by_book
            .iter()
            .filter(|(_, g)| g.as_str() == genre)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Books whose genre is set and child-safe, in insertion order
    pub fn get_books_for_children(&self) -> Vec<&str> {
        self.genre_by_book
            .iter()
            .filter(|(_, g)| !g.is_empty() && self.config.is_for_children(g))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Appends a book to the favorites
    ///
    /// Ignored if the book is not in the catalog or is already a favorite.
    pub fn add_book_in_favorites(&mut self, name: &str) {
        declined("add_book_in_favorites", self.try_add_book_in_favorites(name));
    }

    /// Appends a book to the favorites, reporting why it was declined
    pub fn try_add_book_in_favorites(&mut self, name: &str) -> Result<(), Rejection> {
        if !self.genre_by_book.contains_key(name) {
            return Err(Rejection::UnknownBook(name.to_string()));
        }
        if !self.favorites.insert(name.to_string()) {
            return Err(Rejection::AlreadyFavorite(name.to_string()));
        }
        Ok(())
    }

    /// Removes a book from the favorites, keeping it in the catalog
    pub fn delete_book_from_favorites(&mut self, name: &str) {
        declined(
            "delete_book_from_favorites",
            self.try_delete_book_from_favorites(name),
        );
    }

    /// Removes a book from the favorites, reporting if it was not one
    pub fn try_delete_book_from_favorites(&mut self, name: &str) -> Result<(), Rejection> {
        // shift_remove keeps the remaining favorites in order
        if self.favorites.shift_remove(name) {
            Ok(())
        } else {
            Err(Rejection::NotFavorite(name.to_string()))
        }
    }

    /// Favorite books, in the order they were added
    pub fn get_list_of_favorites_books(&self) -> Vec<&str> {
        self.favorites.iter().map(String::as_str).collect()
    }

    /// Every book as a record, in insertion order
    pub fn books(&self) -> impl Iterator<Item = Book> + '_ {
        self.genre_by_book.iter().map(|(name, genre)| {
            Book::new(name.as_str())
                .with_genre(genre.as_str())
                .with_favorite(self.favorites.contains(name))
        })
    }

    /// Counts of books, genres and favorites
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::collect(self)
    }

    /// Serializable view of the whole catalog
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            books: self.books().collect(),
            favorites: self.favorites.iter().cloned().collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn declined(operation: &str, result: Result<(), Rejection>) {
    if let Err(rejection) = result {
        debug!("{} declined: {}", operation, rejection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LibraryError;

    const KEY: &str = "Тайна забытого ключа";
    const BOOK: &str = "Тайна забытой книги";

    fn catalog_with(names: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for name in names {
            catalog.add_new_book(name);
        }
        catalog
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get_books_genre().is_empty());
        assert!(catalog.get_list_of_favorites_books().is_empty());
        assert_eq!(catalog.config().max_name_length, 40);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = Catalog::new();
        let second = Catalog::new();
        first.add_new_book(KEY);
        assert!(first.contains_book(KEY));
        assert!(!second.contains_book(KEY));
    }

    #[test]
    fn test_add_reports_empty_name() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.try_add_new_book(""), Err(Rejection::EmptyName));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_reports_long_name() {
        let mut catalog = Catalog::new();
        let name = "а".repeat(41);
        assert_eq!(
            catalog.try_add_new_book(&name),
            Err(Rejection::NameTooLong { length: 41, max: 40 })
        );
    }

    #[test]
    fn test_add_counts_characters_not_bytes() {
        let mut catalog = Catalog::new();
        // 40 Cyrillic letters are 80 bytes
        let name = "ж".repeat(40);
        assert_eq!(catalog.try_add_new_book(&name), Ok(()));
        assert!(catalog.contains_book(&name));
    }

    #[test]
    fn test_add_reports_duplicate() {
        let mut catalog = catalog_with(&[KEY]);
        catalog.set_book_genre(KEY, "Комедии");
        assert_eq!(
            catalog.try_add_new_book(KEY),
            Err(Rejection::DuplicateBook(KEY.to_string()))
        );
        assert_eq!(catalog.get_book_genre(KEY), Some("Комедии"));
    }

    #[test]
    fn test_whitespace_name_is_a_name() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.try_add_new_book(" "), Ok(()));
        assert_eq!(catalog.get_book_genre(" "), Some(""));
    }

    #[test]
    fn test_set_genre_reports_unknown_book() {
        let mut catalog = catalog_with(&[KEY]);
        assert_eq!(
            catalog.try_set_book_genre(BOOK, "Ужасы"),
            Err(Rejection::UnknownBook(BOOK.to_string()))
        );
        assert_eq!(
            catalog.try_set_book_genre(BOOK, "Боевик"),
            Err(Rejection::UnknownBook(BOOK.to_string()))
        );
        assert_eq!(catalog.get_book_genre(BOOK), None);
    }

    #[test]
    fn test_set_genre_reports_unknown_genre() {
        let mut catalog = catalog_with(&[KEY]);
        assert_eq!(
            catalog.try_set_book_genre(KEY, "Боевик"),
            Err(Rejection::UnknownGenre("Боевик".to_string()))
        );
        assert_eq!(
            catalog.try_set_book_genre(KEY, ""),
            Err(Rejection::UnknownGenre(String::new()))
        );
    }

    #[test]
    fn test_set_genre_overwrites() {
        let mut catalog = catalog_with(&[KEY]);
        catalog.set_book_genre(KEY, "Ужасы");
        catalog.set_book_genre(KEY, "Мультфильмы");
        assert_eq!(catalog.get_book_genre(KEY), Some("Мультфильмы"));
    }

    #[test]
    fn test_unknown_genre_keeps_previous_genre() {
        let mut catalog = catalog_with(&[KEY]);
        catalog.set_book_genre(KEY, "Детективы");
        catalog.set_book_genre(KEY, "Боевик");
        assert_eq!(catalog.get_book_genre(KEY), Some("Детективы"));
    }

    #[test]
    fn test_genre_labels_are_exact() {
        let mut catalog = catalog_with(&[KEY]);
        catalog.set_book_genre(KEY, "ужасы");
        catalog.set_book_genre(KEY, "Ужасы ");
        assert_eq!(catalog.get_book_genre(KEY), Some(""));
    }

    #[test]
    fn test_with_specific_genre_keeps_insertion_order() {
        let mut catalog = catalog_with(&["В", "Б", "А"]);
        catalog.set_book_genre("А", "Комедии");
        catalog.set_book_genre("В", "Комедии");
        assert_eq!(catalog.get_books_with_specific_genre("Комедии"), vec!["В", "А"]);
    }

    #[test]
    fn test_with_empty_genre_lists_genreless_books() {
        let mut catalog = catalog_with(&[KEY, BOOK]);
        catalog.set_book_genre(KEY, "Ужасы");
        assert_eq!(catalog.get_books_with_specific_genre(""), vec![BOOK]);
    }

    #[test]
    fn test_books_for_children_excludes_adult_genres() {
        let mut catalog = catalog_with(&["А", "Б", "В", "Г", "Д", "Е"]);
        catalog.set_book_genre("А", "Фантастика");
        catalog.set_book_genre("Б", "Ужасы");
        catalog.set_book_genre("В", "Детективы");
        catalog.set_book_genre("Г", "Мультфильмы");
        catalog.set_book_genre("Д", "Комедии");
        assert_eq!(catalog.get_books_for_children(), vec!["А", "Г", "Д"]);
    }

    #[test]
    fn test_favorites_report_unknown_and_duplicate() {
        let mut catalog = catalog_with(&[KEY]);
        assert_eq!(
            catalog.try_add_book_in_favorites(BOOK),
            Err(Rejection::UnknownBook(BOOK.to_string()))
        );
        assert_eq!(catalog.try_add_book_in_favorites(KEY), Ok(()));
        assert_eq!(
            catalog.try_add_book_in_favorites(KEY),
            Err(Rejection::AlreadyFavorite(KEY.to_string()))
        );
        assert!(catalog.is_favorite(KEY));
    }

    #[test]
    fn test_delete_favorite_keeps_order_and_book() {
        let mut catalog = catalog_with(&["А", "Б", "В"]);
        for name in ["А", "Б", "В"] {
            catalog.add_book_in_favorites(name);
        }

        catalog.delete_book_from_favorites("А");

        assert_eq!(catalog.get_list_of_favorites_books(), vec!["Б", "В"]);
        assert!(catalog.contains_book("А"));
        assert!(!catalog.is_favorite("А"));
    }

    #[test]
    fn test_delete_reports_not_favorite() {
        let mut catalog = catalog_with(&[KEY]);
        assert_eq!(
            catalog.try_delete_book_from_favorites(KEY),
            Err(Rejection::NotFavorite(KEY.to_string()))
        );
        assert_eq!(
            catalog.try_delete_book_from_favorites(BOOK),
            Err(Rejection::NotFavorite(BOOK.to_string()))
        );
    }

    #[test]
    fn test_favorite_can_be_added_again_after_delete() {
        let mut catalog = catalog_with(&["А", "Б"]);
        catalog.add_book_in_favorites("А");
        catalog.add_book_in_favorites("Б");
        catalog.delete_book_from_favorites("А");
        catalog.add_book_in_favorites("А");
        assert_eq!(catalog.get_list_of_favorites_books(), vec!["Б", "А"]);
    }

    #[test]
    fn test_books_yields_records() {
        let mut catalog = catalog_with(&[KEY, BOOK]);
        catalog.set_book_genre(KEY, "Фантастика");
        catalog.add_book_in_favorites(BOOK);

        let books: Vec<Book> = catalog.books().collect();
        assert_eq!(
            books,
            vec![
                Book::new(KEY).with_genre("Фантастика"),
                Book::new(BOOK).with_favorite(true),
            ]
        );
    }

    #[test]
    fn test_with_config_custom_limits() {
        let config = CatalogConfig::default()
            .with_max_name_length(5)
            .with_genres(["Сказки", "Триллеры"], ["Сказки"]);
        let mut catalog = Catalog::with_config(config).unwrap();

        catalog.add_new_book("Репка");
        catalog.add_new_book("Колобок");
        catalog.add_new_book("Оно");
        catalog.set_book_genre("Репка", "Сказки");
        catalog.set_book_genre("Оно", "Триллеры");
        catalog.set_book_genre("Оно", "Ужасы");

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.contains_book("Колобок"));
        assert_eq!(catalog.get_book_genre("Оно"), Some("Триллеры"));
        assert_eq!(catalog.get_books_for_children(), vec!["Репка"]);
        assert_eq!(catalog.known_genres(), ["Сказки", "Триллеры"]);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = CatalogConfig::default().with_max_name_length(0);
        let result = Catalog::with_config(config);
        assert!(matches!(result, Err(LibraryError::InvalidConfig(_))));
    }
}
