//! The outbound side: what a UI collaborator must draw.

use crate::project::{Detail, Preview};
use crate::theme::ThemeColors;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// How a [`ListUpdate`] relates to what is already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Clear the list and show only these items (a new result set).
    Replace,
    /// Add these items after the ones already shown ("show more").
    Append,
}

/// A change to the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListUpdate<'c> {
    pub mode: ListMode,
    pub items: Vec<Preview<'c>>,
    /// Matches not yet revealed, after this update.
    pub remaining: usize,
    /// The whole matched sequence is empty: show the "no results" message.
    pub is_empty: bool,
}
impl ListUpdate<'_> {
    /// State of the "show more" button after this update.
    pub fn show_more(&self) -> ShowMore {
        ShowMore { remaining: self.remaining }
    }
}

/// The "show more" button: its label, and whether it can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowMore {
    pub remaining: usize,
}
impl ShowMore {
    pub fn is_enabled(&self) -> bool {
        self.remaining > 0
    }
}
impl Display for ShowMore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Show more ({})", self.remaining)
    }
}

/// A UI collaborator able to draw the browser's state.
///
/// Calls are made synchronously from [`dispatch`](crate::dispatch) and
/// [`Session::start`](crate::Session::start), one per handled action at most.
pub trait Renderer {
    fn render_list(&mut self, update: ListUpdate<'_>);
    fn render_detail(&mut self, detail: Detail<'_>);
    fn set_theme_colors(&mut self, colors: ThemeColors);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render_list(&mut self, update: ListUpdate<'_>) {
        (**self).render_list(update)
    }

    fn render_detail(&mut self, detail: Detail<'_>) {
        (**self).render_detail(detail)
    }

    fn set_theme_colors(&mut self, colors: ThemeColors) {
        (**self).set_theme_colors(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(20, "Show more (20)", true)]
    #[case(1, "Show more (1)", true)]
    #[case(0, "Show more (0)", false)]
    fn test_show_more(#[case] remaining: usize, #[case] label: &str, #[case] enabled: bool) {
        let button = ListUpdate { mode: ListMode::Append, items: vec![], remaining, is_empty: false }.show_more();
        assert_eq!(button.to_string(), label);
        assert_eq!(button.is_enabled(), enabled);
    }
}
