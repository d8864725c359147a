use crate::{Id, Node};

/// Give every node still at `Id(0)` a fresh id, starting at `*next`.
pub fn assign_node_ids(root: &mut Node, next: &mut u32) {
    // only assign if currently unset
    if root.id() == Id(0) {
        root.set_id(Id(*next));
        *next = next.wrapping_add(1);
    }

    if let Some(children) = root.children_mut() {
        for c in children {
            assign_node_ids(c, next);
        }
    }
}

/// Largest id in the subtree.
pub fn max_node_id(node: &Node) -> u32 {
    node.children()
        .iter()
        .map(max_node_id)
        .fold(node.id().0, u32::max)
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children_mut()?
        .iter_mut()
        .find_map(|c| find_node_by_id_mut(c, id))
}

/// First child that is an element (`childNodes[0]` for well-formed surfaces).
pub fn first_element_child(node: &Node) -> Option<&Node> {
    node.children()
        .iter()
        .find(|c| matches!(c, Node::Element { .. }))
}
