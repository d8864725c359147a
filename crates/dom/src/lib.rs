//! # dom
//!
//! The slice of a DOM that editable surfaces need: an id-addressed node tree,
//! the document selection, flattened text content, and the mapping between
//! DOM boundary points and absolute text offsets.

mod document;
mod selection;
mod text;
mod traverse;
mod types;

pub use document::Document;
pub use selection::{
    DomPoint, DomSelection, locate_selection, offset_to_point, point_to_offset, restore_selection,
};
pub use text::{collect_text, text_content, text_len};
pub use traverse::{
    assign_node_ids, find_node_by_id, find_node_by_id_mut, first_element_child, max_node_id,
};
pub use types::{Id, Node, NodeId};
