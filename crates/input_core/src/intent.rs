//! Normalized description of a single text mutation.

use crate::selection::SelectionRange;
use crate::text::splice_text;

/// Whether an intent puts text in or only takes it out.
///
/// Decides where the provisional caret lands after the splice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Delete,
}

/// Replace `[range_start, range_end)` of the surface text with `replacement`.
///
/// Produced by [`normalize`](crate::normalize) and consumed within the same
/// edit cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditIntent {
    pub range_start: usize,
    pub range_end: usize,
    pub replacement: String,
    pub kind: EditKind,
}

impl EditIntent {
    pub fn insert(range: SelectionRange, replacement: impl Into<String>) -> Self {
        Self {
            range_start: range.start,
            range_end: range.end,
            replacement: replacement.into(),
            kind: EditKind::Insert,
        }
    }

    pub fn delete(range: SelectionRange) -> Self {
        Self {
            range_start: range.start,
            range_end: range.end,
            replacement: String::new(),
            kind: EditKind::Delete,
        }
    }

    #[inline]
    pub fn range(&self) -> SelectionRange {
        SelectionRange::new(self.range_start, self.range_end)
    }

    /// Caret position right after the splice, before any transform runs.
    pub fn provisional_caret(&self) -> usize {
        match self.kind {
            EditKind::Insert => self.range_start + self.replacement.len(),
            EditKind::Delete => self.range_start,
        }
    }

    /// Apply the intent to `text`.
    pub fn apply(&self, text: &str) -> String {
        splice_text(text, self.range_start, self.range_end, &self.replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_caret_lands_after_replacement() {
        let intent = EditIntent::insert(SelectionRange::caret(3), "world");
        assert_eq!(intent.apply("hi "), "hi world");
        assert_eq!(intent.provisional_caret(), 8);
    }

    #[test]
    fn delete_caret_lands_at_range_start() {
        let intent = EditIntent::delete(SelectionRange::new(1, 3));
        assert_eq!(intent.apply("abcd"), "ad");
        assert_eq!(intent.provisional_caret(), 1);
    }
}
