//! Text selection representation.

use crate::text::clamp_to_char_boundary;

/// A selection over surface text as a byte range.
///
/// The range is always normalized such that `start <= end`. A collapsed
/// range (`start == end`) is a caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    /// Start byte offset of the selection (inclusive).
    pub start: usize,
    /// End byte offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection (caret) at `at`.
    #[inline]
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Returns `true` if the selection is empty (zero-width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both ends into `[0, value.len()]` and onto char boundaries.
    ///
    /// Returns the clamped range and whether anything had to move.
    pub fn clamp_to(self, value: &str) -> (Self, bool) {
        let start = clamp_to_char_boundary(value, self.start);
        let end = clamp_to_char_boundary(value, self.end);
        let clamped = Self::new(start, end);
        (clamped, clamped != self)
    }

    /// Returns the selected substring from the given value.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` are out of bounds or not on character boundaries.
    #[inline]
    pub fn slice<'a>(&self, value: &'a str) -> &'a str {
        &value[self.start..self.end]
    }
}
