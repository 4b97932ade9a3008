//! Filtering, pagination and detail projection over a [`Catalog`].
//!
//! A [`Session`] holds the transient browsing state: the active [`Query`],
//! the matched sequence it produced, and how many pages of it are revealed.
//! UI bindings translate user events into [`Action`]s and hand them to
//! [`dispatch`], which updates the session and tells a [`Renderer`] what to
//! draw.
//!
//! # Example
//!
//! ```
//! use bookcase_browse::{Action, Detail, ListUpdate, Outcome, Query, Renderer, Session, ThemeColors, dispatch};
//! # use bookcase_catalog::Catalog;
//! # use bookcase_catalog::models::Book;
//! # use time::{Date, Month};
//! # let published = Date::from_calendar_date(1965, Month::August, 1).unwrap().midnight().assume_utc();
//! # let book = |id: &str, title: &str| Book {
//! #     id: id.into(), title: title.into(), author: "herbert".into(), image: String::new(),
//! #     description: String::new(), published, genres: vec!["scifi".into()],
//! # };
//! # let catalog = Catalog::new(
//! #     vec![book("1", "Dune"), book("2", "Children of Dune"), book("3", "The Dragon in the Sea")],
//! #     [("herbert", "Frank Herbert")],
//! #     [("scifi", "Science Fiction")],
//! # ).unwrap();
//!
//! #[derive(Default)]
//! struct Titles(Vec<String>);
//! impl Renderer for Titles {
//!     fn render_list(&mut self, update: ListUpdate<'_>) {
//!         self.0 = update.items.iter().map(|p| p.title.to_string()).collect();
//!     }
//!     fn render_detail(&mut self, _: Detail<'_>) {}
//!     fn set_theme_colors(&mut self, _: ThemeColors) {}
//! }
//!
//! let mut session = Session::new(&catalog);
//! let mut titles = Titles::default();
//! let outcome = dispatch(&mut session, Action::SubmitFilter(Query::from_form("dune", "any", "any")), &mut titles);
//! assert_eq!(outcome, Outcome::Listed { shown: 2, remaining: 0 });
//! assert_eq!(titles.0, ["Dune", "Children of Dune"]);
//! ```
//!
//! [`Catalog`]: bookcase_catalog::Catalog

mod action;
pub mod error;
mod filter;
mod paginate;
mod project;
mod render;
mod session;
mod theme;

pub use crate::action::{Action, Outcome, dispatch};
pub use crate::filter::{Query, Selection, filter};
pub use crate::paginate::{Cursor, DEFAULT_PAGE_SIZE, page_slice, remaining, visible_slice};
pub use crate::project::{Detail, Preview, Subtitle, lookup};
pub use crate::render::{ListMode, ListUpdate, Renderer, ShowMore};
pub use crate::session::Session;
pub use crate::theme::{Rgb, Theme, ThemeColors};
