use super::{HostRef, HostSurface};
use crate::error::EditError;
use crate::transform::ChangeSource;
use dom::{Id, Node};
use input_core::{
    EditEvent, EditableValue, InputId, InputStore, LineMode, SelectionRange,
};

/// Native form control flavours the adapter can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// `<input>` with a missing or `text`-like type.
    Text,
    /// `<input type="number">`.
    Number,
    TextArea,
}

impl ControlKind {
    pub fn line_mode(self) -> LineMode {
        match self {
            ControlKind::TextArea => LineMode::MultiLine,
            ControlKind::Text | ControlKind::Number => LineMode::SingleLine,
        }
    }
}

/// Classify an element as a native text control, if it is one.
pub fn control_kind(node: &Node) -> Option<ControlKind> {
    let name = node.name()?;
    if name.eq_ignore_ascii_case("textarea") {
        return Some(ControlKind::TextArea);
    }
    if !name.eq_ignore_ascii_case("input") {
        return None;
    }

    let ty = node.attr("type").map(str::trim).filter(|s| !s.is_empty());
    match ty {
        None => Some(ControlKind::Text), // missing type defaults to text
        Some(t) if t.eq_ignore_ascii_case("number") => Some(ControlKind::Number),
        Some(t)
            if ["text", "search", "email", "url", "tel", "password"]
                .iter()
                .any(|k| t.eq_ignore_ascii_case(k)) =>
        {
            Some(ControlKind::Text)
        }
        _ => None,
    }
}

/// Convert a DOM node id into the store key for its control.
pub fn to_input_id(id: Id) -> InputId {
    InputId::from(id.0)
}

/// Adapter over a control whose value and selection indices live in an
/// [`InputStore`].
pub struct NativeControlHost<'a, S: InputStore + ?Sized> {
    store: &'a mut S,
    id: InputId,
    kind: ControlKind,
}

impl<'a, S: InputStore + ?Sized> NativeControlHost<'a, S> {
    pub fn new(store: &'a mut S, id: InputId, kind: ControlKind) -> Self {
        Self { store, id, kind }
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    fn detached(&self) -> EditError {
        EditError::Detached(self.host_ref())
    }
}

impl<S: InputStore + ?Sized> HostSurface for NativeControlHost<'_, S> {
    fn host_ref(&self) -> HostRef {
        HostRef::Control(self.id)
    }

    fn line_mode(&self) -> LineMode {
        self.kind.line_mode()
    }

    fn numeric(&self) -> bool {
        self.kind == ControlKind::Number
    }

    fn change_source(&self, event: &EditEvent) -> ChangeSource {
        ChangeSource::Event(event.kind().clone())
    }

    fn read_text(&self) -> Result<String, EditError> {
        self.store
            .get(self.id)
            .map(str::to_string)
            .ok_or_else(|| self.detached())
    }

    fn read_selection(&self) -> Result<Option<SelectionRange>, EditError> {
        self.store
            .selection(self.id)
            .map(Some)
            .ok_or_else(|| self.detached())
    }

    fn write_text(&mut self, value: &EditableValue) -> Result<(), EditError> {
        if self.store.get(self.id).is_none() {
            return Err(self.detached());
        }
        let rendered = value.render();
        if self.store.get(self.id) != Some(rendered.as_str()) {
            // Assigning a new value moves the native caret to the end.
            self.store.set(self.id, rendered);
        }
        Ok(())
    }

    fn write_selection(&mut self, range: SelectionRange) -> Result<(), EditError> {
        if self.store.get(self.id).is_none() {
            return Err(self.detached());
        }
        self.store.set_selection_range(self.id, range.start, range.end);
        Ok(())
    }
}
