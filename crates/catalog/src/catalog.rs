//! The immutable catalog: book records plus the author and genre tables they
//! reference.

use crate::error::{ErrorKind, Result};
use crate::models::{Author, AuthorId, Book, BookId, Genre, GenreId};
use crate::options::{ANY, SelectOption};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::instrument;

/// A validated, read-only dataset of books, authors and genres.
///
/// Construction checks referential integrity once, so that everything
/// downstream (filtering, previews, the detail view) can rely on every
/// identifier resolving. Record order is preserved exactly as supplied: it is
/// the order results are listed in, and the order select options are offered.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: Vec<Author>,
    genres: Vec<Genre>,
    book_index: HashMap<BookId, usize>,
    author_index: HashMap<AuthorId, usize>,
    genre_index: HashMap<GenreId, usize>,
}

impl Catalog {
    /// Builds a catalog from its three tables.
    ///
    /// Returns [`ErrorKind::InvalidData`] if any identifier is duplicated
    /// within its table, or if a book references an author or genre that
    /// does not exist.
    #[instrument(skip_all, fields(books = books.len(), authors, genres))]
    pub fn new(
        books: Vec<Book>,
        authors: impl IntoIterator<Item = impl Into<Author>>,
        genres: impl IntoIterator<Item = impl Into<Genre>>,
    ) -> Result<Self> {
        let authors: Vec<Author> = authors.into_iter().map(Into::into).collect();
        let genres: Vec<Genre> = genres.into_iter().map(Into::into).collect();
        tracing::Span::current().record("authors", authors.len());
        tracing::Span::current().record("genres", genres.len());

        let book_index = index(&books, |b| &b.id, "book")?;
        let author_index = index(&authors, |a| &a.id, "author")?;
        let genre_index = index(&genres, |g| &g.id, "genre")?;

        for book in &books {
            if !author_index.contains_key(&book.author) {
                exn::bail!(ErrorKind::InvalidData(format!(
                    "book {} references unknown author {}",
                    book.id, book.author
                )));
            }
            if let Some(genre) = book.genres.iter().find(|g| !genre_index.contains_key(*g)) {
                exn::bail!(ErrorKind::InvalidData(format!("book {} references unknown genre {}", book.id, genre)));
            }
        }

        Ok(Self { books, authors, genres, book_index, author_index, genre_index })
    }

    /// All books, in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The author table, in catalog order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// The genre table, in catalog order.
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Looks up a book by identifier.
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.book_index.get(id).map(|&i| &self.books[i])
    }

    pub fn author(&self, id: &str) -> Option<&Author> {
        self.author_index.get(id).map(|&i| &self.authors[i])
    }

    pub fn genre(&self, id: &str) -> Option<&Genre> {
        self.genre_index.get(id).map(|&i| &self.genres[i])
    }

    /// Display name of the book's author.
    ///
    /// Always resolves for books belonging to this catalog; construction
    /// rejects dangling author references.
    pub fn author_name(&self, book: &Book) -> &str {
        self.author(book.author.as_str()).map(|a| a.name.as_str()).unwrap_or_default()
    }

    /// Options for the author filter: "All Authors" first, then every author
    /// in catalog order.
    pub fn author_options(&self) -> Vec<SelectOption<'_>> {
        options("All Authors", self.authors.iter().map(|a| (a.id.as_str(), a.name.as_str())))
    }

    /// Options for the genre filter: "All Genres" first, then every genre in
    /// catalog order.
    pub fn genre_options(&self) -> Vec<SelectOption<'_>> {
        options("All Genres", self.genres.iter().map(|g| (g.id.as_str(), g.name.as_str())))
    }
}

fn index<T, K>(items: &[T], key: impl Fn(&T) -> &K, table: &str) -> Result<HashMap<K, usize>>
where
    K: Clone + Eq + Hash + std::fmt::Display,
{
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let id = key(item);
        if index.insert(id.clone(), position).is_some() {
            exn::bail!(ErrorKind::InvalidData(format!("duplicate {table} id: {id}")));
        }
    }
    Ok(index)
}

fn options<'a>(
    any_label: &'static str,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> Vec<SelectOption<'a>> {
    std::iter::once(SelectOption { value: ANY, label: any_label })
        .chain(entries.map(|(value, label)| SelectOption { value, label }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rstest::rstest;

    fn authors() -> Vec<(&'static str, &'static str)> {
        vec![("herbert", "Frank Herbert"), ("le-guin", "Ursula K. Le Guin")]
    }

    fn genres() -> Vec<(&'static str, &'static str)> {
        vec![("scifi", "Science Fiction"), ("fantasy", "Fantasy")]
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::new(
            vec![
                fixtures::book("dune", "Dune", "herbert", &["scifi"]),
                fixtures::book("earthsea", "A Wizard of Earthsea", "le-guin", &["fantasy"]),
            ],
            authors(),
            genres(),
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.book("earthsea").unwrap().title, "A Wizard of Earthsea");
        assert!(catalog.book("missing").is_none());
        assert_eq!(catalog.author("herbert").unwrap().name, "Frank Herbert");
        assert_eq!(catalog.genre("fantasy").unwrap().name, "Fantasy");
        let dune = catalog.book("dune").unwrap();
        assert_eq!(catalog.author_name(dune), "Frank Herbert");
    }

    #[test]
    fn test_preserves_order() {
        let books = vec![
            fixtures::book("c", "Third", "herbert", &[]),
            fixtures::book("a", "First", "herbert", &[]),
            fixtures::book("b", "Second", "herbert", &[]),
        ];
        let catalog = Catalog::new(books, authors(), genres()).unwrap();
        let ids: Vec<_> = catalog.books().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[rstest]
    #[case::duplicate_book(
        vec![fixtures::book("x", "One", "herbert", &[]), fixtures::book("x", "Two", "herbert", &[])],
        authors(),
        genres()
    )]
    #[case::duplicate_author(vec![], vec![("herbert", "Frank"), ("herbert", "Brian")], genres())]
    #[case::duplicate_genre(vec![], authors(), vec![("scifi", "SF"), ("scifi", "Sci-Fi")])]
    #[case::unknown_author(vec![fixtures::book("x", "One", "asimov", &[])], authors(), genres())]
    #[case::unknown_genre(vec![fixtures::book("x", "One", "herbert", &["horror"])], authors(), genres())]
    fn test_rejects_inconsistent_data(
        #[case] books: Vec<Book>,
        #[case] authors: Vec<(&'static str, &'static str)>,
        #[case] genres: Vec<(&'static str, &'static str)>,
    ) {
        let err = Catalog::new(books, authors, genres).unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidData(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_select_options() {
        let catalog = Catalog::new(vec![], authors(), genres()).unwrap();
        let options = catalog.author_options();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], SelectOption { value: "any", label: "All Authors" });
        assert_eq!(options[1], SelectOption { value: "herbert", label: "Frank Herbert" });
        let options = catalog.genre_options();
        assert_eq!(options[0].label, "All Genres");
        assert_eq!(options[2].value, "fantasy");
    }
}
