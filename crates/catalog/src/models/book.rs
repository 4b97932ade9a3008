use super::{AuthorId, BookId, GenreId};
use serde::Deserialize;
use time::OffsetDateTime;

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    /// Unique within the catalog
    pub id: BookId,
    pub title: String,
    /// Foreign key into the author table
    pub author: AuthorId,
    /// Cover image reference (URI or path), passed through untouched
    pub image: String,
    pub description: String,
    /// Original publication date
    #[serde(with = "time::serde::rfc3339")]
    pub published: OffsetDateTime,
    /// Foreign keys into the genre table
    pub genres: Vec<GenreId>,
}
impl Book {
    /// Calendar year of publication, as shown in the detail subtitle.
    pub fn year(&self) -> i32 {
        self.published.year()
    }
}
