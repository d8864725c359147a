//! Backing store for native form controls.
//!
//! A native control owns its value and selection indices, the way an
//! `<input>` element does. The controller reads them through the
//! [`InputStore`](crate::InputStore) trait and writes them back after a commit.

use crate::id::InputId;
use crate::selection::SelectionRange;
use crate::text::clamp_to_char_boundary;
use std::collections::HashMap;

/// Per-control state. Offsets are byte indices on char boundaries.
#[derive(Clone, Debug, Default)]
struct ControlState {
    value: String,
    /// Monotonic revision counter, incremented on any value change.
    caret: usize,
    /// When `Some(anchor)`, the selection is `min(anchor, caret)..max(anchor, caret)`.
    selection_anchor: Option<usize>,
}

/// Value and selection indices of every mounted native control.
///
/// ```
/// use input_core::{InputId, InputValueStore, SelectionRange};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::from_raw(1);
///
/// store.ensure_initial(id, "Hello".to_string());
/// store.set_selection_range(id, 1, 3);
///
/// assert_eq!(store.selection(id), Some(SelectionRange::new(1, 3)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, ControlState>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this control.
    pub fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    /// Returns the stored value for this control, if any.
    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// `selectionStart..selectionEnd`; collapsed at the caret when nothing is selected.
    pub fn selection(&self, id: InputId) -> Option<SelectionRange> {
        self.values.get(&id).map(|s| {
            selection_range(&s.value, s.selection_anchor, s.caret)
                .unwrap_or(SelectionRange::caret(clamp_to_char_boundary(&s.value, s.caret)))
        })
    }

    /// Set/overwrite the value for this control.
    ///
    /// The caret moves to the end and any selection is cleared, which is what
    /// a browser does when script assigns `value`.
    pub fn set(&mut self, id: InputId, value: String) {
        let st = self.values.entry(id).or_default();
        st.caret = value.len();
        st.value = value;
        st.selection_anchor = None;
    }

    /// Ensure an entry exists; if missing, inserts the provided initial value.
    pub fn ensure_initial(&mut self, id: InputId, initial: String) {
        self.values.entry(id).or_insert_with(|| ControlState {
            caret: initial.len(),
            value: initial,
            ..ControlState::default()
        });
    }

    /// `setSelectionRange(start, end)`: forward selection, anchor at `start`.
    ///
    /// Offsets are clamped into the value; a collapsed range clears the selection.
    pub fn set_selection_range(&mut self, id: InputId, start: usize, end: usize) {
        let st = self.values.entry(id).or_default();
        let range = SelectionRange::new(
            clamp_to_char_boundary(&st.value, start),
            clamp_to_char_boundary(&st.value, end),
        );
        st.caret = range.end;
        st.selection_anchor = (!range.is_empty()).then_some(range.start);
    }

    /// Drop a control's entry (unmount).
    pub fn remove(&mut self, id: InputId) {
        self.values.remove(&id);
    }
}

fn selection_range(value: &str, anchor: Option<usize>, caret: usize) -> Option<SelectionRange> {
    let anchor = anchor?;

    let a = clamp_to_char_boundary(value, anchor);
    let c = clamp_to_char_boundary(value, caret);
    if a == c {
        return None;
    }

    Some(SelectionRange::new(a, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_initial_puts_caret_at_end_and_keeps_existing_entries() {
        let mut store = InputValueStore::new();
        let id = InputId::from_raw(1);

        store.ensure_initial(id, "abc".to_string());
        assert_eq!(store.selection(id), Some(SelectionRange::caret(3)));

        store.ensure_initial(id, "zzz".to_string());
        assert_eq!(store.get(id), Some("abc"));
    }

    #[test]
    fn set_moves_the_caret_to_the_end_and_drops_the_selection() {
        let mut store = InputValueStore::new();
        let id = InputId::from_raw(1);
        store.ensure_initial(id, "abc".to_string());
        store.set_selection_range(id, 0, 2);

        store.set(id, "abcd".to_string());
        assert_eq!(store.selection(id), Some(SelectionRange::caret(4)));
    }

    #[test]
    fn set_selection_range_clamps_and_collapses() {
        let mut store = InputValueStore::new();
        let id = InputId::from_raw(1);
        store.set(id, "a€b".to_string());

        store.set_selection_range(id, 2, 40);
        assert_eq!(store.selection(id), Some(SelectionRange::new(1, 5)));

        store.set_selection_range(id, 4, 4);
        assert_eq!(store.selection(id), Some(SelectionRange::caret(4)));
    }

    #[test]
    fn remove_forgets_the_control() {
        let mut store = InputValueStore::new();
        let id = InputId::from_raw(1);
        store.set(id, "x".to_string());
        store.remove(id);
        assert!(!store.has(id));
        assert_eq!(store.selection(id), None);
    }
}
