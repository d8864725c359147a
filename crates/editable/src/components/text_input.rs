use crate::clipboard::Clipboard;
use crate::controller::{CommitOutcome, EditableController};
use crate::error::EditError;
use crate::host::{ControlKind, HostRef, NativeControlHost, control_kind, to_input_id};
use crate::options::EditableOptions;
use crate::ref_sink::RefSink;
use crate::transform::ValueTransform;
use dom::{Document, Id, Node, collect_text};
use input_core::{
    EditEvent, EditableState, EditableValue, InputStore, SelectionRange, line_count,
    normalize_newlines,
};

/// Initial value of a native control, as the HTML parser would seed it.
///
/// `<input>` takes its `value` attribute. `<textarea>` takes its text
/// content with newlines normalized and one leading newline stripped.
pub fn seed_value(node: &Node, kind: ControlKind) -> String {
    match kind {
        ControlKind::Text | ControlKind::Number => node.attr("value").unwrap_or("").to_string(),
        ControlKind::TextArea => {
            let mut raw = String::new();
            for c in node.children() {
                collect_text(c, &mut raw);
            }
            let mut initial = normalize_newlines(&raw).into_owned();
            // HTML textarea parsing: if the first character is a newline, strip it.
            if initial.starts_with('\n') {
                initial.remove(0);
            }
            initial
        }
    }
}

fn parse_value(text: String, kind: ControlKind) -> EditableValue {
    if kind == ControlKind::Number {
        if let Ok(n) = text.trim().parse::<f64>() {
            if n.is_finite() {
                return EditableValue::Number(n);
            }
        }
    }
    EditableValue::Text(text)
}

/// Editable native form control (`<input>`, `<input type="number">` or
/// `<textarea>`).
///
/// The control's value and selection live in an [`InputStore`]; the element
/// in the [`Document`] is only consulted for its kind, its initial value and
/// autosizing.
pub struct TextInput {
    node: Id,
    kind: Option<ControlKind>,
    controller: EditableController,
    ref_sink: Option<RefSink<Id>>,
}

impl TextInput {
    pub fn new(node: Id, options: EditableOptions) -> Self {
        Self {
            node,
            kind: None,
            controller: EditableController::new(options, false),
            ref_sink: None,
        }
    }

    pub fn with_transform(mut self, transform: impl ValueTransform + 'static) -> Self {
        self.controller.set_transform(transform);
        self
    }

    pub fn with_ref(mut self, sink: RefSink<Id>) -> Self {
        self.ref_sink = Some(sink);
        self
    }

    pub fn node(&self) -> Id {
        self.node
    }

    pub fn kind(&self) -> Option<ControlKind> {
        self.kind
    }

    pub fn state(&self) -> &EditableState {
        self.controller.state()
    }

    pub fn controller(&self) -> &EditableController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut EditableController {
        &mut self.controller
    }

    fn host_ref(&self) -> HostRef {
        HostRef::Control(to_input_id(self.node))
    }

    /// Adapter over this control's store entry. Fails before mount.
    pub fn host<'a, S: InputStore + ?Sized>(
        &self,
        store: &'a mut S,
    ) -> Result<NativeControlHost<'a, S>, EditError> {
        let kind = self.kind.ok_or(EditError::Detached(self.host_ref()))?;
        Ok(NativeControlHost::new(store, to_input_id(self.node), kind))
    }

    pub fn mount<S: InputStore + ?Sized>(
        &mut self,
        doc: &mut Document,
        store: &mut S,
        selection: Option<SelectionRange>,
    ) -> Result<(), EditError> {
        let node = doc
            .node(self.node)
            .ok_or(EditError::Detached(self.host_ref()))?;
        let kind = control_kind(node).ok_or(EditError::StructuralMismatch {
            surface: self.host_ref(),
            detail: "not a native text control",
        })?;

        let id = to_input_id(self.node);
        store.ensure_initial(id, seed_value(node, kind));
        if let Some(sel) = selection {
            store.set_selection_range(id, sel.start, sel.end);
        }
        let text = store.get(id).unwrap_or_default().to_string();
        let caret = store.selection(id).unwrap_or_default();
        self.controller
            .seed(EditableState::new(parse_value(text, kind), caret));
        self.kind = Some(kind);

        log::debug!(target: "editable.component", "mounted {kind:?} {}", self.host_ref());
        if let Some(sink) = &mut self.ref_sink {
            sink.publish(Some(self.node));
        }
        self.autosize(doc)
    }

    /// Drive one raw event through the control.
    pub async fn handle_event<S: InputStore + ?Sized>(
        &mut self,
        event: &mut EditEvent,
        doc: &mut Document,
        store: &mut S,
        clipboard: &mut dyn Clipboard,
    ) -> Result<CommitOutcome, EditError> {
        if !doc.contains(self.node) {
            return Err(EditError::Detached(self.host_ref()));
        }
        let mut host = self.host(store)?;
        let outcome = self.controller.apply(event, &mut host, clipboard).await?;
        if matches!(outcome, CommitOutcome::Committed(_)) {
            self.autosize(doc)?;
        }
        Ok(outcome)
    }

    /// Fit the element's height to its line count. No-op unless enabled.
    pub fn autosize(&self, doc: &mut Document) -> Result<(), EditError> {
        let opts = self.controller.options();
        if !opts.autosize {
            return Ok(());
        }
        let lines = line_count(&self.controller.state().value.render());
        let height = format!("{}px", lines as f32 * opts.line_height);
        if !doc.set_style(self.node, "height", &height) {
            return Err(EditError::Detached(self.host_ref()));
        }
        log::trace!(target: "editable.component", "{}: height {height}", self.host_ref());
        Ok(())
    }

    pub fn unmount<S: InputStore + ?Sized>(&mut self, store: &mut S) {
        store.remove(to_input_id(self.node));
        self.kind = None;
        self.controller.seed(EditableState::default());
        if let Some(sink) = &mut self.ref_sink {
            sink.publish(None);
        }
        log::debug!(target: "editable.component", "unmounted {}", self.host_ref());
    }
}
