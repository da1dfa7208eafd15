//! Domain types for the bookshelf catalog
//!
//! - `book`: the book record and name length rules
//! - `genre`: the fixed genre taxonomy and its age rating

mod book;
mod genre;

pub use book::{name_length, Book, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
pub use genre::Genre;
