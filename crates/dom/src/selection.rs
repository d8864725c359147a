//! Live document selection and its mapping onto flattened text offsets.
//!
//! A DOM boundary point is `(node, offset)`: inside a text node the offset
//! counts bytes of that node's text, inside an element it counts children.
//! Surfaces work in absolute offsets into their flattened text content, so
//! both directions are provided here: [`locate_selection`] and
//! [`restore_selection`].

use crate::text::text_len;
use crate::{Id, Node};
use input_core::{SelectionRange, clamp_to_char_boundary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomPoint {
    pub node: Id,
    pub offset: usize,
}

impl DomPoint {
    pub fn new(node: Id, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// Anchor/focus pair, as `window.getSelection()` reports it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomSelection {
    pub anchor: DomPoint,
    pub focus: DomPoint,
}

impl DomSelection {
    pub fn collapsed(at: DomPoint) -> Self {
        Self {
            anchor: at,
            focus: at,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}

/// Absolute offset of `point` within `root`'s flattened text.
///
/// Returns `None` when the point's node is not inside `root`.
pub fn point_to_offset(root: &Node, point: DomPoint) -> Option<usize> {
    fn walk(node: &Node, target: DomPoint, pos: &mut usize) -> Option<usize> {
        match node {
            Node::Text { id, text } => {
                if *id == target.node {
                    return Some(*pos + clamp_to_char_boundary(text, target.offset));
                }
                *pos += text.len();
                None
            }
            Node::Comment { id, .. } => (*id == target.node).then_some(*pos),
            Node::Element { id, children, .. } | Node::Document { id, children } => {
                if *id == target.node {
                    let before: usize = children.iter().take(target.offset).map(text_len).sum();
                    return Some(*pos + before);
                }
                children.iter().find_map(|c| walk(c, target, pos))
            }
        }
    }

    let mut pos = 0;
    walk(root, point, &mut pos)
}

/// Boundary point for absolute `offset` within `root`.
///
/// Lands inside the first text node that contains the offset (left affinity).
/// Offsets past the end land at the end of the last text node; a surface
/// without text nodes gets `(root, 0)`.
pub fn offset_to_point(root: &Node, offset: usize) -> DomPoint {
    fn walk(node: &Node, offset: usize, pos: &mut usize, last: &mut Option<DomPoint>) -> Option<DomPoint> {
        match node {
            Node::Text { id, text } => {
                if offset <= *pos + text.len() {
                    let local = clamp_to_char_boundary(text, offset - *pos);
                    return Some(DomPoint::new(*id, local));
                }
                *pos += text.len();
                *last = Some(DomPoint::new(*id, text.len()));
                None
            }
            Node::Comment { .. } => None,
            Node::Element { children, .. } | Node::Document { children, .. } => children
                .iter()
                .find_map(|c| walk(c, offset, pos, last)),
        }
    }

    let mut pos = 0;
    let mut last = None;
    walk(root, offset, &mut pos, &mut last)
        .or(last)
        .unwrap_or(DomPoint::new(root.id(), 0))
}

/// Selection Locator: map a live selection onto `[start, end)` within `root`.
///
/// Works regardless of how the text is wrapped in child elements. Returns
/// `None` if either end lies outside `root`.
pub fn locate_selection(root: &Node, selection: &DomSelection) -> Option<SelectionRange> {
    let anchor = point_to_offset(root, selection.anchor)?;
    let focus = point_to_offset(root, selection.focus)?;
    Some(SelectionRange::new(anchor, focus))
}

/// Caret Restorer: the selection that spans `range` within `root`.
///
/// Collapsed ranges yield a collapsed selection.
pub fn restore_selection(root: &Node, range: SelectionRange) -> DomSelection {
    let anchor = offset_to_point(root, range.start);
    if range.is_empty() {
        return DomSelection::collapsed(anchor);
    }
    DomSelection {
        anchor,
        focus: offset_to_point(root, range.end),
    }
}
