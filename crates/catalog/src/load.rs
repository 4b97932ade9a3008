//! JSON loading for catalogs supplied by an external data collaborator.
//!
//! The expected document shape is:
//!
//! ```json
//! {
//!   "books": [{
//!     "id": "...", "title": "...", "author": "<author id>", "image": "...",
//!     "description": "...", "published": "2013-05-30T00:00:00.000Z",
//!     "genres": ["<genre id>", ...]
//!   }],
//!   "authors": { "<author id>": "Display Name", ... },
//!   "genres": { "<genre id>": "Display Name", ... }
//! }
//! ```
//!
//! The author and genre tables keep document order, which is the order
//! select options are offered in.

use crate::Catalog;
use crate::error::{ErrorKind, Result};
use crate::models::{Author, Book, Genre};
use exn::ResultExt;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt::{Formatter, Result as FmtResult};
use std::marker::PhantomData;
use std::path::Path;
use tracing::instrument;

#[derive(Deserialize)]
struct Document {
    books: Vec<Book>,
    #[serde(deserialize_with = "ordered_table")]
    authors: Vec<Author>,
    #[serde(deserialize_with = "ordered_table")]
    genres: Vec<Genre>,
}

/// Deserializes an `{id: name}` object into a list of entries, in document
/// order. Deserializing into a map type would lose that order.
fn ordered_table<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<(String, String)>,
{
    struct TableVisitor<T>(PhantomData<T>);
    impl<'de, T: From<(String, String)>> Visitor<'de> for TableVisitor<T> {
        type Value = Vec<T>;

        fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
            f.write_str("a map of identifiers to display names")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or_default());
            while let Some(entry) = map.next_entry::<String, String>()? {
                entries.push(T::from(entry));
            }
            Ok(entries)
        }
    }
    deserializer.deserialize_map(TableVisitor(PhantomData))
}

impl Catalog {
    /// Parses and validates a catalog from a JSON document.
    ///
    /// Returns [`ErrorKind::Parse`] for malformed JSON (including timestamps
    /// that are not RFC 3339), and [`ErrorKind::InvalidData`] if the records
    /// are inconsistent (see [`Catalog::new`]).
    #[instrument(skip(json), fields(json_size = json.as_ref().len()))]
    pub fn from_json(json: impl AsRef<[u8]>) -> Result<Self> {
        let document: Document = serde_json::from_slice(json.as_ref()).or_raise(|| ErrorKind::Parse)?;
        let catalog = Catalog::new(document.books, document.authors, document.genres)?;
        tracing::debug!(books = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Reads a JSON catalog file from disk. See [`Catalog::from_json`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read(path.as_ref()).or_raise(|| ErrorKind::Io)?;
        Self::from_json(json)
    }
}
