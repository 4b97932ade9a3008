//! Read-only projections of catalog records for display: list previews, and
//! the detail view of a single selected book.

use bookcase_catalog::Catalog;
use bookcase_catalog::models::{Book, BookId};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Looks up the full record for a selected identifier.
///
/// Returns `None` for identifiers not in the catalog. Identifiers come from
/// rendered previews, so this should only happen with a stale or tampered UI.
pub fn lookup<'c>(catalog: &'c Catalog, id: &str) -> Option<&'c Book> {
    catalog.book(id)
}

/// A list item: just enough to draw a cover tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview<'c> {
    /// Handed back by the UI as the target of a selection.
    pub id: &'c BookId,
    pub title: &'c str,
    pub image: &'c str,
    /// Author display name
    pub author: &'c str,
}
impl<'c> Preview<'c> {
    pub fn new(catalog: &'c Catalog, book: &'c Book) -> Self {
        Self { id: &book.id, title: &book.title, image: &book.image, author: catalog.author_name(book) }
    }
}

/// The detail overlay for a single book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detail<'c> {
    pub id: &'c BookId,
    pub title: &'c str,
    /// Cover image, also used for the blurred backdrop
    pub image: &'c str,
    /// Author display name
    pub author: &'c str,
    /// Year of publication
    pub year: i32,
    pub description: &'c str,
}
impl<'c> Detail<'c> {
    pub fn new(catalog: &'c Catalog, book: &'c Book) -> Self {
        Self {
            id: &book.id,
            title: &book.title,
            image: &book.image,
            author: catalog.author_name(book),
            year: book.year(),
            description: &book.description,
        }
    }

    /// The line under the title, e.g. `Frank Herbert (1965)`.
    pub fn subtitle(&self) -> Subtitle<'c> {
        Subtitle { author: self.author, year: self.year }
    }
}

/// See [`Detail::subtitle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtitle<'c> {
    author: &'c str,
    year: i32,
}
impl Display for Subtitle<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({})", self.author, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookcase_catalog::fixtures;

    #[test]
    fn test_lookup() {
        let catalog = fixtures::catalog(3);
        assert_eq!(lookup(&catalog, "book-2").map(|b| b.title.as_str()), Some("Book 2"));
        assert!(lookup(&catalog, "book-4").is_none());
        assert!(lookup(&catalog, "").is_none());
    }

    #[test]
    fn test_preview() {
        let catalog = fixtures::catalog(2);
        let book = catalog.book("book-2").unwrap();
        let preview = Preview::new(&catalog, book);
        assert_eq!(preview.id.as_str(), "book-2");
        assert_eq!(preview.title, "Book 2");
        assert_eq!(preview.author, "Iain M. Banks");
        assert_eq!(preview.image, "https://covers.example/book-2.jpg");
    }

    #[test]
    fn test_detail() {
        let catalog = fixtures::catalog(1);
        let detail = Detail::new(&catalog, catalog.book("book-1").unwrap());
        assert_eq!(detail.title, "Book 1");
        assert_eq!(detail.description, "Description of Book 1.");
        assert_eq!(detail.subtitle().to_string(), "Octavia Butler (2000)");
    }
}
