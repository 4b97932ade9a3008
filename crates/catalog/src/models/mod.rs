mod author;
mod book;
mod genre;
mod id;

pub use self::author::Author;
pub use self::book::Book;
pub use self::genre::Genre;
pub use self::id::{AuthorId, BookId, GenreId};
