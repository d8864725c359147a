//! # editable
//!
//! Caret-synchronizing edit controller for editable surfaces.
//!
//! Raw surface events are normalized into edit intents, spliced into the
//! current text, checked against a length limit, optionally rewritten by an
//! asynchronous value transform, committed, and finally reflected onto the
//! surface followed by a single caret restoration.
//!
//! Two host adapters share the same controller:
//! - [`NativeControlHost`]: a form control with its own selection indices.
//! - [`FreeFormHost`]: a content-editable subtree whose selection is mapped
//!   through the document.
//!
//! ```
//! use dom::{Document, Node};
//! use editable::{ContentEditable, EditableOptions, MemoryClipboard};
//! use input_core::{EditEvent, SelectionRange};
//!
//! let mut doc = Document::new(vec![Node::element("div", vec![])]);
//! let root = doc.root().children()[0].id();
//!
//! let mut surface = ContentEditable::new(root, EditableOptions::default());
//! surface.mount(&mut doc, "hi ", Some(SelectionRange::caret(3))).unwrap();
//!
//! let mut clipboard = MemoryClipboard::new();
//! let mut paste = EditEvent::paste("world");
//! pollster::block_on(surface.handle_event(&mut paste, &mut doc, &mut clipboard)).unwrap();
//!
//! assert_eq!(surface.state().value.render(), "hi world");
//! assert_eq!(surface.state().selection(), SelectionRange::caret(8));
//! ```

mod clipboard;
mod components;
mod controller;
mod error;
mod host;
mod options;
mod pipeline;
mod ref_sink;
mod scheduler;
mod transform;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use components::{ContentEditable, TextInput, seed_value};
pub use controller::{CommitOutcome, EditableController};
pub use error::{ConfigError, EditError, TransformError};
pub use host::{
    ControlKind, FreeFormHost, HostRef, HostSurface, NativeControlHost, Placeholder,
    control_kind, render_surface, to_input_id,
};
pub use options::{CaretPolicy, EditableOptions, OrderingPolicy};
pub use pipeline::{
    Generations, PendingEdit, ResolvedEdit, committed_caret, prepare, splice_value,
};
pub use ref_sink::RefSink;
pub use scheduler::SelectionScheduler;
pub use transform::{ChangeSource, ChangeStats, TransformFuture, ValueTransform};
