//! Store interface used by native-control host adapters.
//!
//! Keeps the adapter generic over the backing store, so integration layers
//! and tests can swap in their own.

use crate::id::InputId;
use crate::selection::SelectionRange;

/// What a native control exposes: its value and built-in selection indices.
pub trait InputStore {
    /// Ensure a control entry exists; if missing, inserts the initial value.
    fn ensure_initial(&mut self, id: InputId, initial: String);

    /// Returns the stored value for this control, if any.
    fn get(&self, id: InputId) -> Option<&str>;

    /// Current `selectionStart..selectionEnd`, if the control exists.
    fn selection(&self, id: InputId) -> Option<SelectionRange>;

    /// Overwrite the value (moves the caret to the end).
    fn set(&mut self, id: InputId, value: String);

    /// Built-in range setter; must tolerate `start == end`.
    fn set_selection_range(&mut self, id: InputId, start: usize, end: usize);

    /// Forget the control (unmount).
    fn remove(&mut self, id: InputId);
}

impl InputStore for crate::store::InputValueStore {
    #[inline]
    fn ensure_initial(&mut self, id: InputId, initial: String) {
        crate::store::InputValueStore::ensure_initial(self, id, initial)
    }

    #[inline]
    fn get(&self, id: InputId) -> Option<&str> {
        crate::store::InputValueStore::get(self, id)
    }

    #[inline]
    fn selection(&self, id: InputId) -> Option<SelectionRange> {
        crate::store::InputValueStore::selection(self, id)
    }

    #[inline]
    fn set(&mut self, id: InputId, value: String) {
        crate::store::InputValueStore::set(self, id, value)
    }

    #[inline]
    fn set_selection_range(&mut self, id: InputId, start: usize, end: usize) {
        crate::store::InputValueStore::set_selection_range(self, id, start, end)
    }

    #[inline]
    fn remove(&mut self, id: InputId) {
        crate::store::InputValueStore::remove(self, id)
    }
}
