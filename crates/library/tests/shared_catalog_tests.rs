//! Integration tests for the thread-shared catalog handle

use bookshelf_library::{Catalog, SharedCatalog};
use std::thread;

#[test]
fn test_concurrent_adds_are_all_recorded() {
    let shared = SharedCatalog::new(Catalog::new());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    shared.add_new_book(&format!("Книга {}-{}", worker, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(shared.get_books_genre().len(), 200);
}

#[test]
fn test_concurrent_duplicates_collapse() {
    let shared = SharedCatalog::default();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                shared.add_new_book("Дюна");
                shared.add_book_in_favorites("Дюна");
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(shared.get_books_genre().len(), 1);
    assert_eq!(shared.get_list_of_favorites_books(), vec!["Дюна"]);
}

#[test]
fn test_per_thread_order_is_preserved() {
    let shared = SharedCatalog::default();

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for i in 0..50 {
                let name = format!("Том {:02}", i);
                shared.add_new_book(&name);
                shared.add_book_in_favorites(&name);
            }
        })
    };
    writer.join().expect("writer panicked");

    let favorites = shared.get_list_of_favorites_books();
    let mut sorted = favorites.clone();
    sorted.sort();
    assert_eq!(favorites, sorted);
    assert_eq!(favorites.len(), 50);
}

#[test]
fn test_shared_views_match_catalog() {
    let mut catalog = Catalog::new();
    catalog.add_new_book("А");
    catalog.add_new_book("Б");
    catalog.set_book_genre("А", "Мультфильмы");
    catalog.set_book_genre("Б", "Детективы");
    let expected = catalog.snapshot();

    let shared = SharedCatalog::from(catalog);
    assert_eq!(shared.snapshot(), expected);
    assert_eq!(shared.get_books_for_children(), vec!["А"]);
    assert_eq!(shared.get_books_with_specific_genre("Детективы"), vec!["Б"]);
    assert_eq!(shared.get_book_genre("В"), None);
    assert_eq!(shared.stats().total_books, 2);

    shared.delete_book_from_favorites("А");
    assert!(shared.get_list_of_favorites_books().is_empty());
}
