//! # input_core
//!
//! UI-agnostic editing layer for editable surfaces.
//!
//! This crate holds the pure half of the edit cycle:
//! - [`normalize`]: raw surface events → [`EditIntent`]
//! - [`OverflowPolicy`]: maximum-length truncation (text) and clamping (numbers)
//! - [`EditableState`]: committed value plus caret
//! - [`InputValueStore`]: value and selection indices of native form controls
//!
//! It depends only on `std`. The async transform, host adapters and
//! selection restoration live in the `editable` crate.

mod id;
mod intent;
mod normalize;
mod overflow;
mod selection;
mod state;
mod store;
mod text;
mod traits;

pub use id::InputId;
pub use intent::{EditIntent, EditKind};
pub use normalize::{
    EditEvent, EditEventKind, Key, LineMode, Normalized, SurfaceSnapshot, normalize,
};
pub use overflow::{OverflowPolicy, OverflowResult};
pub use selection::SelectionRange;
pub use state::{EditableState, EditableValue};
pub use store::InputValueStore;
pub use traits::InputStore;

pub use text::{
    char_count, clamp_to_char_boundary, filter_single_line, line_count, next_cursor_boundary,
    normalize_newlines, prev_cursor_boundary, splice_text, truncate_chars,
};
