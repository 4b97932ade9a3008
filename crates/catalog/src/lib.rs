//! Immutable book catalog.
//!
//! A [`Catalog`] holds the static dataset a browsing session works over: the
//! book records, plus the author and genre tables they reference. It is built
//! once, either in code via [`Catalog::new`] or from a JSON document via
//! [`Catalog::from_json`], and never mutated afterwards.
//!
//! # Example
//!
//! ```
//! use bookcase_catalog::Catalog;
//!
//! let catalog = Catalog::from_json(r#"{
//!     "books": [{
//!         "id": "dune", "title": "Dune", "author": "herbert",
//!         "image": "dune.jpg", "description": "Spice.",
//!         "published": "1965-08-01T00:00:00Z", "genres": ["scifi"]
//!     }],
//!     "authors": { "herbert": "Frank Herbert" },
//!     "genres": { "scifi": "Science Fiction" }
//! }"#).unwrap();
//!
//! let dune = catalog.book("dune").unwrap();
//! assert_eq!(catalog.author_name(dune), "Frank Herbert");
//! assert_eq!(catalog.genre_options()[0].label, "All Genres");
//! ```

mod catalog;
pub mod error;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
mod load;
pub mod models;
mod options;

pub use crate::catalog::Catalog;
pub use crate::options::{ANY, SelectOption};
