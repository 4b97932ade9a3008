//! The filter engine: turns a [`Query`] into the matched sequence.

use bookcase_catalog::ANY;
use bookcase_catalog::models::{AuthorId, Book, GenreId};
use tracing::instrument;

/// A drop-down filter value: either a specific identifier, or "any".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection<Id> {
    /// Do not filter on this field.
    Any,
    /// Only admit records carrying this identifier.
    Id(Id),
}
impl<Id: From<String>> Selection<Id> {
    /// Parses a raw form value.
    ///
    /// The [`ANY`] sentinel selects [`Selection::Any`], as does an empty
    /// value: malformed input widens the filter rather than failing.
    pub fn from_form(value: impl AsRef<str>) -> Self {
        match value.as_ref().trim() {
            "" | ANY => Self::Any,
            id => Self::Id(Id::from(id.to_string())),
        }
    }
}
impl<Id: PartialEq> Selection<Id> {
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns `true` if a record with identifier `id` passes this filter.
    pub fn admits(&self, id: &Id) -> bool {
        match self {
            Self::Any => true,
            Self::Id(wanted) => wanted == id,
        }
    }

    /// Returns `true` if a record tagged with `ids` passes this filter.
    pub fn admits_any(&self, ids: &[Id]) -> bool {
        match self {
            Self::Any => true,
            Self::Id(wanted) => ids.contains(wanted),
        }
    }
}
impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self::Any
    }
}
impl<Id> From<Id> for Selection<Id> {
    fn from(id: Id) -> Self {
        Self::Id(id)
    }
}

/// The active filter predicates, applied conjunctively.
///
/// The neutral query (see [`Query::default`]) matches every book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    title: String,
    /// Lowercased title filter, or `None` if the title filter is blank.
    needle: Option<String>,
    author: Selection<AuthorId>,
    genre: Selection<GenreId>,
}

impl Query {
    /// Creates the neutral query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a query from the three raw values of a search form.
    ///
    /// Never fails; see [`Selection::from_form`] and [`Query::with_title`].
    pub fn from_form(title: impl Into<String>, author: impl AsRef<str>, genre: impl AsRef<str>) -> Self {
        Self::new()
            .with_title(title)
            .with_author(Selection::<AuthorId>::from_form(author))
            .with_genre(Selection::<GenreId>::from_form(genre))
    }

    /// Sets the case-insensitive title substring filter.
    ///
    /// A blank (empty or whitespace-only) title disables the filter.
    /// Otherwise the value is matched as given, surrounding whitespace
    /// included.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self.needle = (!self.title.trim().is_empty()).then(|| self.title.to_lowercase());
        self
    }

    pub fn with_author(mut self, author: impl Into<Selection<AuthorId>>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<Selection<GenreId>>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &Selection<AuthorId> {
        &self.author
    }

    pub fn genre(&self) -> &Selection<GenreId> {
        &self.genre
    }

    /// Returns `true` if this query matches every book.
    pub fn is_neutral(&self) -> bool {
        self.needle.is_none() && self.author.is_any() && self.genre.is_any()
    }

    /// Returns `true` if `book` satisfies all three predicates.
    pub fn matches(&self, book: &Book) -> bool {
        let title = match &self.needle {
            Some(needle) => book.title.to_lowercase().contains(needle.as_str()),
            None => true,
        };
        title && self.author.admits(&book.author) && self.genre.admits_any(&book.genres)
    }
}

/// Returns the books matching `query`, in their original order.
///
/// An empty result is valid; callers signal the empty state from it.
#[instrument(skip_all, fields(books = books.len(), title = query.title(), matched))]
pub fn filter<'c>(books: &'c [Book], query: &Query) -> Vec<&'c Book> {
    let matched: Vec<&Book> = books.iter().filter(|book| query.matches(book)).collect();
    tracing::Span::current().record("matched", matched.len());
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookcase_catalog::{Catalog, fixtures};
    use rstest::{fixture, rstest};

    #[fixture]
    fn library() -> Catalog {
        Catalog::new(
            vec![
                fixtures::book("1", "Dune", "herbert", &["scifi", "classic"]),
                fixtures::book("2", "Dune Messiah", "herbert", &["scifi"]),
                fixtures::book("3", "The Dispossessed", "le-guin", &["scifi"]),
                fixtures::book("4", "A Wizard of Earthsea", "le-guin", &["fantasy", "classic"]),
                fixtures::book("5", "Dragonflight", "mccaffrey", &["fantasy"]),
            ],
            [("herbert", "Frank Herbert"), ("le-guin", "Ursula K. Le Guin"), ("mccaffrey", "Anne McCaffrey")],
            [("scifi", "Science Fiction"), ("fantasy", "Fantasy"), ("classic", "Classics")],
        )
        .unwrap()
    }

    fn ids(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.id.to_string()).collect()
    }

    #[rstest]
    #[case("", "any", "any", &["1", "2", "3", "4", "5"])]
    #[case("dune", "any", "any", &["1", "2"])]
    #[case("DUNE", "any", "any", &["1", "2"])]
    #[case("   ", "any", "any", &["1", "2", "3", "4", "5"])]
    #[case("", "le-guin", "any", &["3", "4"])]
    #[case("", "any", "classic", &["1", "4"])]
    #[case("", "le-guin", "classic", &["4"])]
    #[case("dune", "le-guin", "any", &[])]
    #[case("", "any", "horror", &[])]
    #[case("sea", "", "", &["4"])]
    // Surrounding whitespace is significant once the title is not blank.
    #[case("dune ", "any", "any", &["2"])]
    fn test_filter(
        library: Catalog,
        #[case] title: &str,
        #[case] author: &str,
        #[case] genre: &str,
        #[case] expected: &[&str],
    ) {
        let query = Query::from_form(title, author, genre);
        assert_eq!(ids(&filter(library.books(), &query)), expected);
    }

    #[rstest]
    fn test_neutral_query_is_identity(library: Catalog) {
        let query = Query::new();
        assert!(query.is_neutral());
        let matched = filter(library.books(), &query);
        assert_eq!(matched.len(), library.len());
        assert!(matched.iter().zip(library.books()).all(|(m, b)| std::ptr::eq(*m, b)));
    }

    #[rstest]
    #[case(Query::from_form("dune", "any", "any"))]
    #[case(Query::from_form("", "le-guin", "classic"))]
    #[case(Query::from_form("a", "any", "fantasy"))]
    fn test_partition(library: Catalog, #[case] query: Query) {
        let matched = filter(library.books(), &query);
        // Order-preserving subsequence where included books match and excluded ones don't.
        let mut rest = matched.iter().peekable();
        for book in library.books() {
            if rest.peek().is_some_and(|m| std::ptr::eq(**m, book)) {
                assert!(query.matches(book));
                rest.next();
            } else {
                assert!(!query.matches(book));
            }
        }
        assert!(rest.next().is_none());
    }

    #[rstest]
    fn test_idempotent(library: Catalog) {
        let query = Query::from_form("d", "any", "scifi");
        let once = filter(library.books(), &query);
        let owned: Vec<Book> = once.iter().map(|b| (*b).clone()).collect();
        let twice = filter(&owned, &query);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[rstest]
    #[case("any", Selection::Any)]
    #[case("", Selection::Any)]
    #[case("  ", Selection::Any)]
    #[case("herbert", Selection::Id(AuthorId::from("herbert")))]
    fn test_selection_from_form(#[case] value: &str, #[case] expected: Selection<AuthorId>) {
        assert_eq!(Selection::from_form(value), expected);
    }

    #[test]
    fn test_builder() {
        let query = Query::new().with_title("Dune").with_author(AuthorId::from("herbert"));
        assert!(!query.is_neutral());
        assert_eq!(query.title(), "Dune");
        assert!(query.genre().is_any());
        assert_eq!(query, Query::from_form("Dune", "herbert", "any"));
    }
}
