use super::{HostRef, HostSurface};
use crate::error::EditError;
use crate::transform::ChangeSource;
use dom::{Document, Id, Node, first_element_child, locate_selection, restore_selection, text_content};
use input_core::{EditEvent, EditableValue, LineMode, SelectionRange};

/// Text shown while a free-form surface is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placeholder {
    pub text: String,
    /// Extra class names for the placeholder element.
    pub class: Option<String>,
}

/// Render `value` as the children of `root`: one content `span` holding the
/// text, followed by the placeholder while the value is empty.
///
/// The surface owns every child of `root`. Anything else found there, such
/// as a sibling after the content wrapper, is dropped by the next render.
///
/// Returns `false` if `root` is not an element in `doc`.
pub fn render_surface(
    doc: &mut Document,
    root: Id,
    value: &EditableValue,
    placeholder: Option<&Placeholder>,
) -> bool {
    let text = value.render();
    let content = if text.is_empty() {
        Node::element("span", vec![])
    } else {
        Node::element("span", vec![Node::text(text.as_str())])
    };

    let mut children = vec![content];
    if let Some(ph) = placeholder.filter(|_| text.is_empty()) {
        let class = match ph.class.as_deref() {
            Some(extra) => format!("placeholder {extra}"),
            None => "placeholder".to_string(),
        };
        children.push(
            Node::element("div", vec![Node::text(ph.text.as_str())])
                .with_attr("class", Some(class.as_str())),
        );
    }
    doc.replace_children(root, children)
}

/// Adapter over a content-editable subtree.
///
/// The first element child of the root (the content wrapper) is the single
/// node both selection reads and caret restores are measured against, so
/// placeholder text never shifts offsets.
pub struct FreeFormHost<'a> {
    doc: &'a mut Document,
    root: Id,
    placeholder: Option<&'a Placeholder>,
}

impl<'a> FreeFormHost<'a> {
    pub fn new(doc: &'a mut Document, root: Id) -> Self {
        Self {
            doc,
            root,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: Option<&'a Placeholder>) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn content(&self) -> Result<&Node, EditError> {
        let root = self
            .doc
            .node(self.root)
            .ok_or(EditError::Detached(self.host_ref()))?;
        first_element_child(root).ok_or(EditError::StructuralMismatch {
            surface: self.host_ref(),
            detail: "no content wrapper element",
        })
    }
}

impl HostSurface for FreeFormHost<'_> {
    fn host_ref(&self) -> HostRef {
        HostRef::Surface(self.root)
    }

    fn line_mode(&self) -> LineMode {
        LineMode::MultiLine
    }

    fn change_source(&self, _event: &EditEvent) -> ChangeSource {
        ChangeSource::Target(self.root)
    }

    fn read_text(&self) -> Result<String, EditError> {
        self.content().map(text_content)
    }

    fn read_selection(&self) -> Result<Option<SelectionRange>, EditError> {
        let content = self.content()?;
        let located = self
            .doc
            .selection()
            .and_then(|sel| locate_selection(content, &sel));
        if located.is_none() {
            log::trace!(
                target: "editable.host",
                "{}: no selection inside the content node",
                self.host_ref()
            );
        }
        Ok(located)
    }

    fn write_text(&mut self, value: &EditableValue) -> Result<(), EditError> {
        if render_surface(self.doc, self.root, value, self.placeholder) {
            Ok(())
        } else {
            Err(EditError::Detached(self.host_ref()))
        }
    }

    fn write_selection(&mut self, range: SelectionRange) -> Result<(), EditError> {
        let selection = restore_selection(self.content()?, range);
        self.doc.set_selection(Some(selection));
        Ok(())
    }
}
