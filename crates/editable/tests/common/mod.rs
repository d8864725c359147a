#![allow(dead_code)]

use dom::{Document, Id, Node, first_element_child, locate_selection};
use editable::TransformError;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use input_core::{EditableValue, SelectionRange};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// `body > [ input, textarea, input[type=number], div ]`
pub struct Page {
    pub doc: Document,
    pub input: Id,
    pub textarea: Id,
    pub number: Id,
    pub surface: Id,
}

pub fn page(input_value: &str, textarea_text: &str) -> Page {
    let doc = Document::new(vec![Node::element(
        "body",
        vec![
            Node::element("input", vec![]).with_attr("value", Some(input_value)),
            Node::element("textarea", vec![Node::text(textarea_text)]),
            Node::element("input", vec![])
                .with_attr("type", Some("number"))
                .with_attr("value", Some("7")),
            Node::element("div", vec![]),
        ],
    )]);
    let ids: Vec<Id> = doc.root().children()[0]
        .children()
        .iter()
        .map(Node::id)
        .collect();
    Page {
        doc,
        input: ids[0],
        textarea: ids[1],
        number: ids[2],
        surface: ids[3],
    }
}

/// Selection as the free-form surface reads it back from the document.
pub fn surface_selection(doc: &Document, root: Id) -> Option<SelectionRange> {
    let content = first_element_child(doc.node(root)?)?;
    locate_selection(content, &doc.selection()?)
}

/// Transform results handed out by the test, one gate per transform call.
///
/// Calls made while no gate is queued resolve immediately with their input.
#[derive(Clone, Default)]
pub struct Gates {
    queue: Rc<RefCell<VecDeque<oneshot::Receiver<Result<EditableValue, TransformError>>>>>,
}

impl Gates {
    /// Queue a gate for the next transform call and return its sender.
    pub fn hold(&self) -> oneshot::Sender<Result<EditableValue, TransformError>> {
        let (tx, rx) = oneshot::channel();
        self.queue.borrow_mut().push_back(rx);
        tx
    }

    pub fn transform(
        &self,
    ) -> impl Fn(EditableValue, editable::ChangeStats) -> LocalBoxFuture<'static, Result<EditableValue, TransformError>>
    + 'static {
        let queue = Rc::clone(&self.queue);
        move |value: EditableValue, _stats: editable::ChangeStats| {
            let gate = queue.borrow_mut().pop_front();
            let fut: LocalBoxFuture<'static, Result<EditableValue, TransformError>> =
                Box::pin(async move {
                    match gate {
                        Some(rx) => rx
                            .await
                            .unwrap_or_else(|_| Err(TransformError::new("gate dropped"))),
                        None => Ok(value),
                    }
                });
            fut
        }
    }
}
