//! Action dispatch: the single entry point a UI binding calls into.

use crate::filter::Query;
use crate::render::Renderer;
use crate::session::Session;
use crate::theme::Theme;
use bookcase_catalog::models::BookId;
use tracing::instrument;

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The search form was submitted.
    SubmitFilter(Query),
    /// The "show more" button was pressed.
    AdvancePage,
    /// A list item was clicked. The UI binding resolves the click target to
    /// the identifier carried by its preview.
    SelectBook(BookId),
    /// The settings form was submitted with a theme name.
    ToggleTheme(String),
}
impl Action {
    pub fn select(id: impl Into<BookId>) -> Self {
        Self::SelectBook(id.into())
    }

    pub fn theme(name: impl Into<String>) -> Self {
        Self::ToggleTheme(name.into())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SubmitFilter(_) => "submit-filter",
            Self::AdvancePage => "advance-page",
            Self::SelectBook(_) => "select-book",
            Self::ToggleTheme(_) => "toggle-theme",
        }
    }
}

/// What handling an [`Action`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The list was redrawn or extended.
    Listed {
        /// Items on screen in total
        shown: usize,
        /// Matches not yet revealed
        remaining: usize,
    },
    /// "Show more" with nothing left to show. Nothing was rendered.
    Exhausted,
    /// The detail view was opened for this book.
    Selected(BookId),
    /// No such book. Nothing was rendered.
    NotFound(BookId),
    /// Theme colors were applied.
    Themed(Theme),
}

/// Handles one action: updates the session, then makes at most one call on
/// `renderer`.
///
/// Never fails. Unknown book identifiers and theme names degrade as
/// described on [`Outcome::NotFound`] and [`Theme::from_name`].
#[instrument(skip_all, fields(action = action.name()))]
pub fn dispatch(session: &mut Session<'_>, action: Action, renderer: &mut impl Renderer) -> Outcome {
    match action {
        Action::SubmitFilter(query) => {
            let update = session.submit_filter(query);
            renderer.render_list(update);
            Outcome::Listed { shown: session.shown(), remaining: session.remaining() }
        },
        Action::AdvancePage => match session.advance_page() {
            Some(update) => {
                renderer.render_list(update);
                Outcome::Listed { shown: session.shown(), remaining: session.remaining() }
            },
            None => {
                tracing::debug!(page = session.page(), "Nothing left to show");
                Outcome::Exhausted
            },
        },
        Action::SelectBook(id) => match session.select_book(id.as_str()) {
            Some(detail) => {
                renderer.render_detail(detail);
                Outcome::Selected(id)
            },
            None => {
                tracing::debug!(id = %id, "Selected book not in catalog");
                Outcome::NotFound(id)
            },
        },
        Action::ToggleTheme(name) => {
            let theme = Theme::from_name(&name);
            renderer.set_theme_colors(session.set_theme(theme));
            Outcome::Themed(theme)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Action::SubmitFilter(Query::new()), "submit-filter")]
    #[case(Action::AdvancePage, "advance-page")]
    #[case(Action::select("book-1"), "select-book")]
    #[case(Action::theme("night"), "toggle-theme")]
    fn test_name(#[case] action: Action, #[case] expected: &str) {
        assert_eq!(action.name(), expected);
    }
}
