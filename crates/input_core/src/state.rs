//! Committed per-surface editing state.

use crate::selection::SelectionRange;
use crate::text::clamp_to_char_boundary;
use std::fmt;

/// Value held by an editable surface.
///
/// Text surfaces carry `Text`. Numeric controls carry `Number` once their
/// content parses, and a transform may return either variant.
#[derive(Clone, Debug, PartialEq)]
pub enum EditableValue {
    Text(String),
    Number(f64),
}

impl EditableValue {
    /// The textual form, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EditableValue::Text(s) => Some(s),
            EditableValue::Number(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, EditableValue::Number(_))
    }

    /// Byte length of the rendered value; caret offsets are bounded by it.
    pub fn rendered_len(&self) -> usize {
        match self {
            EditableValue::Text(s) => s.len(),
            EditableValue::Number(n) => n.to_string().len(),
        }
    }

    /// What the surface shows for this value.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for EditableValue {
    fn default() -> Self {
        EditableValue::Text(String::new())
    }
}

impl fmt::Display for EditableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditableValue::Text(s) => f.write_str(s),
            EditableValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for EditableValue {
    fn from(s: &str) -> Self {
        EditableValue::Text(s.to_string())
    }
}

impl From<String> for EditableValue {
    fn from(s: String) -> Self {
        EditableValue::Text(s)
    }
}

impl From<f64> for EditableValue {
    fn from(n: f64) -> Self {
        EditableValue::Number(n)
    }
}

/// Value and caret of one surface, owned by its controller.
///
/// Invariant: for text values `caret_start <= caret_end <= value.len()` and
/// both sit on char boundaries. Numeric values keep both carets at 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditableState {
    pub value: EditableValue,
    pub caret_start: usize,
    pub caret_end: usize,
}

impl EditableState {
    /// Build a state, clamping the caret into the value.
    pub fn new(value: EditableValue, caret: SelectionRange) -> Self {
        let mut st = Self {
            value,
            caret_start: caret.start,
            caret_end: caret.end,
        };
        st.clamp_caret();
        st
    }

    pub fn text(value: impl Into<String>, caret: SelectionRange) -> Self {
        Self::new(EditableValue::Text(value.into()), caret)
    }

    pub fn selection(&self) -> SelectionRange {
        SelectionRange::new(self.caret_start, self.caret_end)
    }

    /// Re-establish the caret invariant after the value changed underneath.
    pub fn clamp_caret(&mut self) {
        match &self.value {
            EditableValue::Text(s) => {
                let sel = self.selection();
                self.caret_start = clamp_to_char_boundary(s, sel.start);
                self.caret_end = clamp_to_char_boundary(s, sel.end);
            }
            EditableValue::Number(_) => {
                self.caret_start = 0;
                self.caret_end = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_caret_into_text() {
        let st = EditableState::text("abc", SelectionRange::new(9, 1));
        assert_eq!((st.caret_start, st.caret_end), (1, 3));
    }

    #[test]
    fn numeric_values_zero_the_caret() {
        let st = EditableState::new(EditableValue::Number(42.0), SelectionRange::caret(2));
        assert_eq!((st.caret_start, st.caret_end), (0, 0));
        assert_eq!(st.value.render(), "42");
    }

    #[test]
    fn rendered_len_follows_display() {
        assert_eq!(EditableValue::from("a€").rendered_len(), 4);
        assert_eq!(EditableValue::from(1.5).rendered_len(), 3);
    }
}
