//! A mounted tree plus the live selection.

use crate::selection::DomSelection;
use crate::text::text_content;
use crate::traverse::{assign_node_ids, find_node_by_id, find_node_by_id_mut, max_node_id};
use crate::{Id, Node};

/// Owns the node tree and the document-wide selection.
///
/// Nodes inserted through the document get fresh ids, so handles taken
/// before a re-render can be revalidated with [`Document::contains`].
#[derive(Clone, Debug)]
pub struct Document {
    root: Node,
    selection: Option<DomSelection>,
    next_id: u32,
}

impl Document {
    /// Wrap `root` in a document node, assigning ids to anything still unset.
    pub fn new(children: Vec<Node>) -> Self {
        let mut root = Node::Document {
            id: Id(0),
            children,
        };
        let mut next = max_node_id(&root).wrapping_add(1).max(1);
        assign_node_ids(&mut root, &mut next);
        Self {
            root,
            selection: None,
            next_id: next,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        find_node_by_id(&self.root, id)
    }

    pub fn node_mut(&mut self, id: Id) -> Option<&mut Node> {
        find_node_by_id_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.node(id).is_some()
    }

    pub fn text_content(&self, id: Id) -> Option<String> {
        self.node(id).map(text_content)
    }

    pub fn selection(&self) -> Option<DomSelection> {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Option<DomSelection>) {
        log::trace!(target: "dom.selection", "set selection: {selection:?}");
        self.selection = selection;
    }

    /// Replace the children of `id`, assigning fresh ids to the new nodes.
    ///
    /// A selection with an endpoint in a removed node is cleared. Returns
    /// `false` if `id` is not in the tree or cannot have children.
    pub fn replace_children(&mut self, id: Id, mut children: Vec<Node>) -> bool {
        let mut next = self.next_id;
        for c in &mut children {
            clear_ids(c);
            assign_node_ids(c, &mut next);
        }

        let Some(slot) = self.node_mut(id).and_then(Node::children_mut) else {
            return false;
        };
        *slot = children;
        self.next_id = next;

        if let Some(sel) = self.selection {
            if !self.contains(sel.anchor.node) || !self.contains(sel.focus.node) {
                log::trace!(target: "dom.selection", "selection endpoints removed, cleared");
                self.selection = None;
            }
        }
        true
    }

    /// Set an inline style declaration on element `id`.
    pub fn set_style(&mut self, id: Id, key: &str, value: &str) -> bool {
        match self.node_mut(id) {
            Some(node) if matches!(node, Node::Element { .. }) => {
                node.set_style(key, value);
                true
            }
            _ => false,
        }
    }
}

fn clear_ids(node: &mut Node) {
    node.set_id(Id(0));
    if let Some(children) = node.children_mut() {
        for c in children {
            clear_ids(c);
        }
    }
}
