use crate::Node;

/// Append the flattened text content of `node` (document order, comments skipped).
pub fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text { text, .. } => out.push_str(text),
        Node::Element { children, .. } | Node::Document { children, .. } => {
            for c in children {
                collect_text(c, out);
            }
        }
        Node::Comment { .. } => {}
    }
}

/// Byte length of the flattened text content of `node`.
pub fn text_len(node: &Node) -> usize {
    match node {
        Node::Text { text, .. } => text.len(),
        Node::Element { children, .. } | Node::Document { children, .. } => {
            children.iter().map(text_len).sum()
        }
        Node::Comment { .. } => 0,
    }
}

pub fn text_content(node: &Node) -> String {
    let mut out = String::with_capacity(text_len(node));
    collect_text(node, &mut out);
    out
}
