//! Bookshelf Library
//!
//! In-memory catalog of books, their genres and a favorites list.
//!
//! The catalog never fails an operation. Invalid input (an over-long name, a
//! duplicate, an unknown book or genre) leaves the catalog untouched. Callers
//! that want to know why a change was declined use the `try_` variants, which
//! report a [`Rejection`].
//!
//! ```rust
//! use bookshelf_library::Catalog;
//!
//! let mut catalog = Catalog::new();
//! catalog.add_new_book("Тайна забытого ключа");
//! catalog.set_book_genre("Тайна забытого ключа", "Фантастика");
//! assert_eq!(catalog.get_books_for_children(), vec!["Тайна забытого ключа"]);
//! assert_eq!(catalog.get_book_genre("Нет такой книги"), None);
//! ```

pub mod catalog;
pub mod error;
pub mod rejection;
pub mod shared;
pub mod snapshot;
pub mod stats;

pub use catalog::Catalog;
pub use error::{LibraryError, LibraryResult};
pub use rejection::Rejection;
pub use shared::SharedCatalog;
pub use snapshot::CatalogSnapshot;
pub use stats::CatalogStats;
