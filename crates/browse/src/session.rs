//! Transient browsing state: the active query, its matched sequence, and the
//! pagination cursor.

use crate::action::Outcome;
use crate::filter::{Query, filter};
use crate::paginate::{Cursor, DEFAULT_PAGE_SIZE, visible_slice};
use crate::project::{Detail, Preview, lookup};
use crate::render::{ListMode, ListUpdate, Renderer};
use crate::theme::{Theme, ThemeColors};
use bookcase_catalog::Catalog;
use bookcase_catalog::models::Book;
use std::num::NonZeroUsize;

/// One user's browsing session over a [`Catalog`].
///
/// The catalog is borrowed and never modified; everything the session owns
/// is cheap to throw away. A new session starts with the neutral query (every
/// book matches) on page 1.
#[derive(Debug, Clone)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    query: Query,
    matches: Vec<&'c Book>,
    cursor: Cursor,
    theme: Theme,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_page_size(catalog, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(catalog: &'c Catalog, page_size: NonZeroUsize) -> Self {
        Self {
            catalog,
            query: Query::new(),
            matches: catalog.books().iter().collect(),
            cursor: Cursor::new(page_size),
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The full matched sequence, revealed or not.
    pub fn matches(&self) -> &[&'c Book] {
        &self.matches
    }

    pub fn page(&self) -> usize {
        self.cursor.page()
    }

    pub fn page_size(&self) -> usize {
        self.cursor.page_size()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The revealed part of the matched sequence.
    pub fn visible(&self) -> &[&'c Book] {
        visible_slice(&self.matches, self.page(), self.page_size())
    }

    pub fn shown(&self) -> usize {
        self.cursor.shown(self.matches.len())
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining(self.matches.len())
    }

    /// Draws the initial state: theme colors, then the first page.
    pub fn start(&self, renderer: &mut impl Renderer) -> Outcome {
        renderer.set_theme_colors(self.theme.colors());
        renderer.render_list(self.first_page());
        Outcome::Listed { shown: self.shown(), remaining: self.remaining() }
    }

    /// Replaces the matched sequence with the results of `query`, and goes
    /// back to page 1.
    pub fn submit_filter(&mut self, query: Query) -> ListUpdate<'c> {
        self.matches = filter(self.catalog.books(), &query);
        self.query = query;
        self.cursor.reset();
        tracing::debug!(matched = self.matches.len(), "Filter applied");
        self.first_page()
    }

    /// Reveals the next page, to be appended below the ones already shown.
    ///
    /// Returns `None`, leaving the cursor untouched, once every match is shown.
    pub fn advance_page(&mut self) -> Option<ListUpdate<'c>> {
        let range = self.cursor.advance(self.matches.len())?;
        tracing::trace!(page = self.page(), start = range.start, end = range.end, "Page revealed");
        Some(ListUpdate {
            mode: ListMode::Append,
            items: self.previews(&self.matches[range]),
            remaining: self.remaining(),
            is_empty: self.matches.is_empty(),
        })
    }

    /// Projects the book with identifier `id` for the detail view.
    ///
    /// Books outside the current matched sequence can still be selected.
    pub fn select_book(&self, id: &str) -> Option<Detail<'c>> {
        lookup(self.catalog, id).map(|book| Detail::new(self.catalog, book))
    }

    pub fn set_theme(&mut self, theme: Theme) -> ThemeColors {
        self.theme = theme;
        theme.colors()
    }

    fn first_page(&self) -> ListUpdate<'c> {
        ListUpdate {
            mode: ListMode::Replace,
            items: self.previews(self.visible()),
            remaining: self.remaining(),
            is_empty: self.matches.is_empty(),
        }
    }

    fn previews(&self, books: &[&'c Book]) -> Vec<Preview<'c>> {
        books.iter().map(|&book| Preview::new(self.catalog, book)).collect()
    }
}
