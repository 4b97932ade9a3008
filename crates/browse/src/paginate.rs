//! The pagination engine.
//!
//! Results are revealed cumulatively: page `n` means the first `n` pages are
//! on screen. The free functions are pure arithmetic over slices; [`Cursor`]
//! is the stateful counter a session keeps.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Number of books revealed per page, unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(36).unwrap();

/// Everything revealed after `page` pages: offsets `[0, page * page_size)`,
/// clamped to the length of `matched`.
pub fn visible_slice<T>(matched: &[T], page: usize, page_size: usize) -> &[T] {
    &matched[..page.saturating_mul(page_size).min(matched.len())]
}

/// The page appended by "show more" when `page` pages are already revealed:
/// offsets `[page * page_size, (page + 1) * page_size)`, clamped.
pub fn page_slice<T>(matched: &[T], page: usize, page_size: usize) -> &[T] {
    &matched[page_range(matched.len(), page, page_size)]
}

/// Number of matches not yet revealed after `page` pages.
pub fn remaining(len: usize, page: usize, page_size: usize) -> usize {
    len.saturating_sub(page.saturating_mul(page_size))
}

fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_mul(page_size).min(len);
    let end = page.saturating_add(1).saturating_mul(page_size).min(len);
    start..end
}

/// The pagination cursor: how many pages of the matched sequence are shown.
///
/// Starts at page 1, only ever moves forward, and is reset whenever the
/// matched sequence is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    page: NonZeroUsize,
    page_size: NonZeroUsize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Cursor {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page: NonZeroUsize::MIN, page_size }
    }

    pub fn page(&self) -> usize {
        self.page.get()
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Back to page 1, for a freshly replaced matched sequence.
    pub fn reset(&mut self) {
        self.page = NonZeroUsize::MIN;
    }

    /// Number of items on screen for a matched sequence of length `len`.
    pub fn shown(&self, len: usize) -> usize {
        len - self.remaining(len)
    }

    pub fn remaining(&self, len: usize) -> usize {
        remaining(len, self.page(), self.page_size())
    }

    /// Reveals the next page of a matched sequence of length `len`, returning
    /// the offsets to append.
    ///
    /// Returns `None`, without moving, once nothing remains.
    pub fn advance(&mut self, len: usize) -> Option<Range<usize>> {
        if self.remaining(len) == 0 {
            return None;
        }
        let range = page_range(len, self.page(), self.page_size());
        self.page = self.page.saturating_add(1);
        Some(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[rstest]
    #[case(25, 1, 5, 0..5)]
    #[case(25, 2, 5, 0..10)]
    #[case(25, 5, 5, 0..25)]
    #[case(25, 9, 5, 0..25)]
    #[case(3, 1, 5, 0..3)]
    #[case(0, 1, 5, 0..0)]
    fn test_visible_slice(#[case] len: usize, #[case] page: usize, #[case] size: usize, #[case] expected: Range<usize>) {
        assert_eq!(visible_slice(&items(len), page, size), &items(len)[expected]);
    }

    #[rstest]
    #[case(25, 1, 5, 5..10)]
    #[case(25, 4, 5, 20..25)]
    #[case(25, 5, 5, 25..25)]
    #[case(12, 2, 5, 10..12)]
    #[case(0, 1, 5, 0..0)]
    fn test_page_slice(#[case] len: usize, #[case] page: usize, #[case] size: usize, #[case] expected: Range<usize>) {
        assert_eq!(page_slice(&items(len), page, size), &items(len)[expected]);
    }

    #[rstest]
    #[case(25, 1, 5, 20)]
    #[case(25, 2, 5, 15)]
    #[case(25, 5, 5, 0)]
    #[case(25, 6, 5, 0)]
    #[case(0, 1, 36, 0)]
    #[case(37, 1, 36, 1)]
    #[case(usize::MAX, usize::MAX, 2, 0)]
    fn test_remaining(#[case] len: usize, #[case] page: usize, #[case] size: usize, #[case] expected: usize) {
        assert_eq!(remaining(len, page, size), expected);
    }

    #[test]
    fn test_cursor_advances_until_exhausted() {
        let mut cursor = Cursor::new(NonZeroUsize::new(5).unwrap());
        assert_eq!((cursor.page(), cursor.shown(12), cursor.remaining(12)), (1, 5, 7));
        assert_eq!(cursor.advance(12), Some(5..10));
        assert_eq!((cursor.page(), cursor.shown(12), cursor.remaining(12)), (2, 10, 2));
        assert_eq!(cursor.advance(12), Some(10..12));
        assert_eq!((cursor.page(), cursor.shown(12), cursor.remaining(12)), (3, 12, 0));
        assert_eq!(cursor.advance(12), None);
        assert_eq!(cursor.page(), 3);
    }

    #[test]
    fn test_cursor_reset() {
        let mut cursor = Cursor::new(NonZeroUsize::new(2).unwrap());
        cursor.advance(10);
        cursor.advance(10);
        assert_eq!(cursor.page(), 3);
        cursor.reset();
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.page_size(), 2);
    }

    #[test]
    fn test_cumulative_reveal_matches_visible_slice() {
        let matched = items(23);
        let mut cursor = Cursor::new(NonZeroUsize::new(4).unwrap());
        let mut rendered: Vec<usize> = visible_slice(&matched, cursor.page(), cursor.page_size()).to_vec();
        for k in 1..=8 {
            if let Some(range) = cursor.advance(matched.len()) {
                rendered.extend_from_slice(&matched[range]);
            }
            assert_eq!(rendered, visible_slice(&matched, k + 1, 4));
        }
        assert_eq!(rendered, matched);
    }

    #[test]
    fn test_default_page_size() {
        assert_eq!(Cursor::default().page_size(), 36);
    }
}
