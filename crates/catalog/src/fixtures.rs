//! Catalog builders for tests.
//!
//! Enabled for this crate's own tests, and for other crates through the
//! `fixtures` feature in their dev-dependencies. Builders panic on invalid
//! input: if test setup is wrong, then the test should not pass.

use crate::Catalog;
use crate::models::{Book, GenreId};
use time::{Date, Month};

/// Authors used by [`catalog`], cycled through in order.
pub const AUTHORS: [(&str, &str); 3] = [
    ("author-1", "Octavia Butler"),
    ("author-2", "Iain M. Banks"),
    ("author-3", "Ann Leckie"),
];

/// Genres used by [`catalog`].
pub const GENRES: [(&str, &str); 2] = [("genre-1", "Science Fiction"), ("genre-2", "Fantasy")];

/// Creates a single book published on the 1st of January 2000.
pub fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
    let published = Date::from_calendar_date(2000, Month::January, 1).expect("valid date");
    Book {
        id: id.into(),
        title: title.to_string(),
        author: author.into(),
        image: format!("https://covers.example/{id}.jpg"),
        description: format!("Description of {title}."),
        published: published.midnight().assume_utc(),
        genres: genres.iter().copied().map(GenreId::from).collect(),
    }
}

/// Creates a catalog of `count` books with ids `book-1` to `book-{count}`,
/// titled `Book 1` to `Book {count}`.
///
/// Authors are assigned round-robin from [`AUTHORS`]. Every book is tagged
/// `genre-1`; even-numbered books are also tagged `genre-2`.
pub fn catalog(count: usize) -> Catalog {
    let books = (1..=count)
        .map(|n| {
            let author = AUTHORS[(n - 1) % AUTHORS.len()].0;
            let genres: &[&str] = if n % 2 == 0 { &["genre-1", "genre-2"] } else { &["genre-1"] };
            book(&format!("book-{n}"), &format!("Book {n}"), author, genres)
        })
        .collect();
    Catalog::new(books, AUTHORS, GENRES).expect("fixture catalog is consistent")
}
