//! Surface adapters.
//!
//! The controller never touches a surface directly. It reads text and
//! selection, and writes them back, through [`HostSurface`]. Native controls
//! own their selection indices; free-form surfaces expose a document
//! selection that has to be mapped onto text offsets.

mod free_form;
mod native;

pub use free_form::{FreeFormHost, Placeholder, render_surface};
pub use native::{ControlKind, NativeControlHost, control_kind, to_input_id};

use crate::error::EditError;
use crate::transform::ChangeSource;
use dom::Id;
use input_core::{EditEvent, EditableValue, InputId, LineMode, SelectionRange};
use std::fmt;

/// Handle naming the surface an adapter is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostRef {
    Control(InputId),
    Surface(Id),
}

impl fmt::Display for HostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostRef::Control(id) => write!(f, "{id}"),
            HostRef::Surface(id) => write!(f, "surface{id}"),
        }
    }
}

/// Read/write access to one mounted surface.
///
/// Implementations re-resolve their node on every call and fail with
/// [`EditError::Detached`] once it is gone.
pub trait HostSurface {
    fn host_ref(&self) -> HostRef;

    fn line_mode(&self) -> LineMode;

    /// Whether spliced text should be parsed as a number.
    fn numeric(&self) -> bool {
        false
    }

    /// Context handed to the value transform for an edit caused by `event`.
    fn change_source(&self, event: &EditEvent) -> ChangeSource;

    fn read_text(&self) -> Result<String, EditError>;

    /// The live selection, or `None` when the surface holds none. The
    /// controller then edits at its committed caret.
    fn read_selection(&self) -> Result<Option<SelectionRange>, EditError>;

    /// Render `value` into the surface.
    fn write_text(&mut self, value: &EditableValue) -> Result<(), EditError>;

    fn write_selection(&mut self, range: SelectionRange) -> Result<(), EditError>;
}
