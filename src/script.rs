//! Edit scripts: a surface, its initial content, and a list of raw events.
//!
//! ```toml
//! surface = "content-editable"
//! initial = "hi "
//! selection = [3, 3]
//!
//! [options]
//! max_length = 10
//!
//! [[steps]]
//! kind = "paste"
//! data = "world"
//! ```

use dom::{Document, Id, Node};
use editable::{
    CommitOutcome, ContentEditable, EditError, EditableOptions, HostSurface, MemoryClipboard,
    TextInput,
};
use input_core::{EditEvent, InputValueStore, Key, SelectionRange};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("cannot read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid script: {0}")]
    Script(#[from] toml::de::Error),
    #[error("step {step}: {source}")]
    Edit {
        step: usize,
        #[source]
        source: EditError,
    },
    #[error("mount failed: {0}")]
    Mount(EditError),
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceKind {
    Input,
    Textarea,
    Number,
    ContentEditable,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Text,
    Paste,
    Cut,
    Backspace,
    Delete,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub kind: StepKind,
    #[serde(default)]
    pub data: String,
    /// Move the selection here before the event fires.
    pub select: Option<[usize; 2]>,
}

impl Step {
    fn event(&self) -> EditEvent {
        match self.kind {
            StepKind::Text => EditEvent::text_input(self.data.as_str()),
            StepKind::Paste => EditEvent::paste(self.data.as_str()),
            StepKind::Cut => EditEvent::cut(),
            StepKind::Backspace => EditEvent::key_down(Key::Backspace),
            StepKind::Delete => EditEvent::key_down(Key::Delete),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    pub surface: SurfaceKind,
    #[serde(default)]
    pub initial: String,
    pub selection: Option<[usize; 2]>,
    #[serde(default)]
    pub options: EditableOptions,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_toml_str(s: &str) -> Result<Self, ReplayError> {
        Ok(toml::from_str(s)?)
    }
}

fn range([a, b]: [usize; 2]) -> SelectionRange {
    SelectionRange::new(a, b)
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    pub step: usize,
    pub kind: StepKind,
    pub outcome: CommitOutcome,
    pub clipboard: Option<String>,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} {:?}: ", self.step, self.kind)?;
        match &self.outcome {
            CommitOutcome::Skipped => f.write_str("no-op")?,
            CommitOutcome::Stale { generation } => write!(f, "stale edit #{generation}")?,
            CommitOutcome::Committed(state) => write!(
                f,
                "{:?} caret {}..{}",
                state.value.render(),
                state.caret_start,
                state.caret_end
            )?,
        }
        if let Some(text) = &self.clipboard {
            write!(f, " (clipboard {text:?})")?;
        }
        Ok(())
    }
}

enum Surface {
    Native {
        input: TextInput,
        store: InputValueStore,
    },
    FreeForm(ContentEditable),
}

impl Surface {
    fn select(&mut self, doc: &mut Document, sel: SelectionRange) -> Result<(), EditError> {
        match self {
            Surface::Native { input, store } => input.host(store)?.write_selection(sel),
            Surface::FreeForm(surface) => surface.host(doc)?.write_selection(sel),
        }
    }

    fn send(
        &mut self,
        doc: &mut Document,
        event: &mut EditEvent,
        clipboard: &mut MemoryClipboard,
    ) -> Result<CommitOutcome, EditError> {
        match self {
            Surface::Native { input, store } => {
                pollster::block_on(input.handle_event(event, doc, store, clipboard))
            }
            Surface::FreeForm(surface) => {
                pollster::block_on(surface.handle_event(event, doc, clipboard))
            }
        }
    }
}

fn build(script: &Script) -> Result<(Document, Surface), ReplayError> {
    let element = match script.surface {
        SurfaceKind::Input => {
            Node::element("input", vec![]).with_attr("value", Some(script.initial.as_str()))
        }
        SurfaceKind::Number => Node::element("input", vec![])
            .with_attr("type", Some("number"))
            .with_attr("value", Some(script.initial.as_str())),
        SurfaceKind::Textarea => {
            Node::element("textarea", vec![Node::text(script.initial.as_str())])
        }
        SurfaceKind::ContentEditable => Node::element("div", vec![]),
    };
    let mut doc = Document::new(vec![Node::element("body", vec![element])]);
    let node: Id = doc.root().children()[0].children()[0].id();
    let selection = script.selection.map(range);
    let options = script.options.clone();

    let surface = match script.surface {
        SurfaceKind::ContentEditable => {
            let mut surface = ContentEditable::new(node, options);
            surface
                .mount(&mut doc, script.initial.as_str(), selection)
                .map_err(ReplayError::Mount)?;
            Surface::FreeForm(surface)
        }
        _ => {
            let mut store = InputValueStore::new();
            let mut input = TextInput::new(node, options);
            input
                .mount(&mut doc, &mut store, selection)
                .map_err(ReplayError::Mount)?;
            Surface::Native { input, store }
        }
    };
    Ok((doc, surface))
}

/// Run every step of `script` and report what each one committed.
pub fn replay(script: &Script) -> Result<Vec<StepReport>, ReplayError> {
    let (mut doc, mut surface) = build(script)?;
    let mut reports = Vec::with_capacity(script.steps.len());

    for (i, step) in script.steps.iter().enumerate() {
        let step_no = i + 1;
        let wrap = |source| ReplayError::Edit {
            step: step_no,
            source,
        };
        if let Some(sel) = step.select {
            surface.select(&mut doc, range(sel)).map_err(wrap)?;
        }

        let mut clipboard = MemoryClipboard::new();
        let mut event = step.event();
        let outcome = surface
            .send(&mut doc, &mut event, &mut clipboard)
            .map_err(wrap)?;
        log::info!(target: "caretsync", "step {step_no}: {outcome:?}");

        reports.push(StepReport {
            step: step_no,
            kind: step.kind,
            outcome,
            clipboard: editable::Clipboard::read_text(&clipboard),
        });
    }
    Ok(reports)
}
