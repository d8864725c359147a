//! Raw surface events → [`EditIntent`].
//!
//! Every event kind that maps onto an edit gets its default action
//! suppressed, so the controller's own splice is the only one applied.

use crate::intent::EditIntent;
use crate::selection::SelectionRange;
use crate::text::{filter_single_line, next_cursor_boundary, normalize_newlines, prev_cursor_boundary};

/// Keys the normalizer cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditEventKind {
    /// `beforeinput` / typed characters. `data` is `None` for input types
    /// that carry no text.
    TextInput { data: Option<String> },
    /// Clipboard paste, already reduced to plain text.
    Paste { text: String },
    Cut,
    KeyDown(Key),
}

impl EditEventKind {
    /// Whether the surface's default action must be suppressed.
    pub fn is_edit(&self) -> bool {
        !matches!(self, EditEventKind::KeyDown(Key::Other(_)))
    }
}

/// A raw event as delivered by the surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditEvent {
    kind: EditEventKind,
    default_prevented: bool,
}

impl EditEvent {
    pub fn new(kind: EditEventKind) -> Self {
        Self {
            kind,
            default_prevented: false,
        }
    }

    pub fn text_input(data: impl Into<String>) -> Self {
        Self::new(EditEventKind::TextInput {
            data: Some(data.into()),
        })
    }

    pub fn paste(text: impl Into<String>) -> Self {
        Self::new(EditEventKind::Paste { text: text.into() })
    }

    pub fn cut() -> Self {
        Self::new(EditEventKind::Cut)
    }

    pub fn key_down(key: Key) -> Self {
        Self::new(EditEventKind::KeyDown(key))
    }

    pub fn kind(&self) -> &EditEventKind {
        &self.kind
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// How inserted text is cleaned up before the splice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineMode {
    /// `<input>`: CR/LF are dropped.
    SingleLine,
    /// `<textarea>` and free-form surfaces: CRLF/CR become LF.
    #[default]
    MultiLine,
}

impl LineMode {
    fn clean<'a>(self, s: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            LineMode::SingleLine => filter_single_line(s),
            LineMode::MultiLine => normalize_newlines(s),
        }
    }
}

/// Text and selection read off the surface right before normalization.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceSnapshot<'a> {
    pub text: &'a str,
    pub selection: SelectionRange,
}

/// Result of normalizing one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    pub intent: EditIntent,
    /// Plain text to write to the system clipboard (cut only).
    pub clipboard: Option<String>,
}

/// Turn `event` into an edit intent against `snapshot`.
///
/// Returns `None` for no-ops: non-edit keys, backspace at offset 0, delete
/// at the end, cut or empty input over a collapsed caret. The snapshot
/// selection is clamped into the text first.
pub fn normalize(
    event: &mut EditEvent,
    snapshot: SurfaceSnapshot<'_>,
    mode: LineMode,
) -> Option<Normalized> {
    let text = snapshot.text;
    let (sel, _) = snapshot.selection.clamp_to(text);

    if event.kind.is_edit() {
        event.prevent_default();
    }

    let intent = match &event.kind {
        EditEventKind::TextInput { data } => {
            let data = data.as_deref().map(|d| mode.clean(d)).unwrap_or_default();
            if data.is_empty() {
                if sel.is_empty() {
                    return None;
                }
                EditIntent::delete(sel)
            } else {
                EditIntent::insert(sel, data.into_owned())
            }
        }
        EditEventKind::Paste { text: pasted } => {
            let pasted = mode.clean(pasted);
            if pasted.is_empty() && sel.is_empty() {
                return None;
            }
            EditIntent::insert(sel, pasted.into_owned())
        }
        EditEventKind::Cut => {
            if sel.is_empty() {
                return None;
            }
            return Some(Normalized {
                clipboard: Some(sel.slice(text).to_string()),
                intent: EditIntent::delete(sel),
            });
        }
        EditEventKind::KeyDown(Key::Backspace) => {
            if !sel.is_empty() {
                EditIntent::delete(sel)
            } else if sel.start == 0 {
                return None;
            } else {
                let prev = prev_cursor_boundary(text, sel.start);
                EditIntent::delete(SelectionRange::new(prev, sel.start))
            }
        }
        EditEventKind::KeyDown(Key::Delete) => {
            if !sel.is_empty() {
                EditIntent::delete(sel)
            } else if sel.end >= text.len() {
                return None;
            } else {
                let next = next_cursor_boundary(text, sel.end);
                EditIntent::delete(SelectionRange::new(sel.end, next))
            }
        }
        EditEventKind::KeyDown(Key::Other(_)) => return None,
    };

    Some(Normalized {
        intent,
        clipboard: None,
    })
}
