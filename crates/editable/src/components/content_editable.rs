use crate::clipboard::Clipboard;
use crate::controller::{CommitOutcome, EditableController};
use crate::error::EditError;
use crate::host::{FreeFormHost, HostRef, HostSurface, Placeholder, render_surface};
use crate::options::EditableOptions;
use crate::ref_sink::RefSink;
use crate::transform::ValueTransform;
use dom::{Document, Id};
use input_core::{EditEvent, EditableState, EditableValue, SelectionRange};

/// Free-form editable surface.
///
/// Renders as `root > span(content)`, plus a placeholder element while the
/// content is empty. The root element must already exist in the document.
pub struct ContentEditable {
    root: Id,
    mounted: bool,
    controller: EditableController,
    placeholder: Option<Placeholder>,
    ref_sink: Option<RefSink<Id>>,
}

impl ContentEditable {
    pub fn new(root: Id, options: EditableOptions) -> Self {
        let placeholder = options.placeholder.clone().map(|text| Placeholder {
            text,
            class: options.placeholder_css.clone(),
        });
        Self {
            root,
            mounted: false,
            controller: EditableController::new(options, true),
            placeholder,
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

    pub fn root(&self) -> Id {
        self.root
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

    /// Adapter over this surface. Fails before mount.
    pub fn host<'a>(&'a self, doc: &'a mut Document) -> Result<FreeFormHost<'a>, EditError> {
        if !self.mounted {
            return Err(EditError::Detached(HostRef::Surface(self.root)));
        }
        Ok(FreeFormHost::new(doc, self.root).with_placeholder(self.placeholder.as_ref()))
    }

    /// Render `initial` into the root and seed the state from it.
    ///
    /// With a `selection`, the live document selection is placed there too.
    /// Without one the caret is seeded at the end of the text, where the
    /// first edit lands until the document selection enters the surface.
    pub fn mount(
        &mut self,
        doc: &mut Document,
        initial: impl Into<EditableValue>,
        selection: Option<SelectionRange>,
    ) -> Result<(), EditError> {
        let detached = EditError::Detached(HostRef::Surface(self.root));
        let class = if self.controller.options().linear {
            "linear-container"
        } else {
            "container"
        };
        let root = doc.node_mut(self.root).ok_or(detached)?;
        root.set_attr("contenteditable", Some("true"));
        root.set_attr("class", Some(class));

        let value = initial.into();
        if !render_surface(doc, self.root, &value, self.placeholder.as_ref()) {
            return Err(EditError::Detached(HostRef::Surface(self.root)));
        }
        let caret = selection.unwrap_or(SelectionRange::caret(value.rendered_len()));
        let state = EditableState::new(value, caret);
        self.mounted = true;

        if selection.is_some() {
            let mut host = FreeFormHost::new(doc, self.root);
            host.write_selection(state.selection())?;
        }
        self.controller.seed(state);

        log::debug!(target: "editable.component", "mounted surface{}", self.root);
        if let Some(sink) = &mut self.ref_sink {
            sink.publish(Some(self.root));
        }
        Ok(())
    }

    /// Drive one raw event through the surface.
    ///
    /// A rejected transform comes back as [`EditError::TransformRejected`];
    /// the surface keeps its previous content and selection.
    pub async fn handle_event(
        &mut self,
        event: &mut EditEvent,
        doc: &mut Document,
        clipboard: &mut dyn Clipboard,
    ) -> Result<CommitOutcome, EditError> {
        if !self.mounted {
            return Err(EditError::Detached(HostRef::Surface(self.root)));
        }
        let mut host = FreeFormHost::new(doc, self.root).with_placeholder(self.placeholder.as_ref());
        self.controller.apply(event, &mut host, clipboard).await
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.controller.seed(EditableState::default());
        if let Some(sink) = &mut self.ref_sink {
            sink.publish(None);
        }
        log::debug!(target: "editable.component", "unmounted surface{}", self.root);
    }
}
