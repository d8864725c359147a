//! Mountable editable components built on [`EditableController`](crate::EditableController).

mod content_editable;
mod text_input;

pub use content_editable::ContentEditable;
pub use text_input::{TextInput, seed_value};
