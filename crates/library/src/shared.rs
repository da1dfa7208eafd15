//! Catalog handle that can be shared between threads
//!
//! Every call takes one lock around the whole catalog, so operations from
//! different threads are serialized and each sees the effects of the ones
//! before it. Readers get owned copies.

use crate::catalog::Catalog;
use crate::snapshot::CatalogSnapshot;
use crate::stats::CatalogStats;
use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    // Catalog operations cannot panic midway, so a poisoned lock still
    // guards a consistent catalog.
    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs several operations under one lock
    pub fn with<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn add_new_book(&self, name: &str) {
        self.lock().add_new_book(name);
    }

    pub fn set_book_genre(&self, name: &str, genre: &str) {
        self.lock().set_book_genre(name, genre);
    }

    pub fn get_book_genre(&self, name: &str) -> Option<String> {
        self.lock().get_book_genre(name).map(String::from)
    }

    pub fn get_books_genre(&self) -> IndexMap<String, String> {
        self.lock().get_books_genre().clone()
    }

    pub fn get_books_with_specific_genre(&self, genre: &str) -> Vec<String> {
        to_owned(self.lock().get_books_with_specific_genre(genre))
    }

    pub fn get_books_for_children(&self) -> Vec<String> {
        to_owned(self.lock().get_books_for_children())
    }

    pub fn add_book_in_favorites(&self, name: &str) {
        self.lock().add_book_in_favorites(name);
    }

    pub fn delete_book_from_favorites(&self, name: &str) {
        self.lock().delete_book_from_favorites(name);
    }

    pub fn get_list_of_favorites_books(&self) -> Vec<String> {
        to_owned(self.lock().get_list_of_favorites_books())
    }

    pub fn stats(&self) -> CatalogStats {
        self.lock().stats()
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.lock().snapshot()
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

fn to_owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(String::from).collect()
}
