//! The per-surface edit controller.

use crate::clipboard::Clipboard;
use crate::error::EditError;
use crate::host::HostSurface;
use crate::options::EditableOptions;
use crate::pipeline::{Generations, PendingEdit, ResolvedEdit, committed_caret, prepare};
use crate::scheduler::SelectionScheduler;
use crate::transform::ValueTransform;
use input_core::{
    EditEvent, EditableState, OverflowPolicy, SurfaceSnapshot, normalize,
};

/// What happened to an edit.
#[derive(Clone, Debug, PartialEq)]
pub enum CommitOutcome {
    /// The event was not an edit, or the edit changed nothing.
    Skipped,
    Committed(EditableState),
    /// A newer edit was issued while this one's transform was pending.
    Stale { generation: u64 },
}

impl CommitOutcome {
    pub fn state(&self) -> Option<&EditableState> {
        match self {
            CommitOutcome::Committed(state) => Some(state),
            _ => None,
        }
    }
}

/// Owns one surface's [`EditableState`] and drives edits against it.
///
/// Host-agnostic: the surface is passed in on every call, so a controller
/// never holds on to a node across re-renders.
pub struct EditableController {
    state: EditableState,
    options: EditableOptions,
    overflow: OverflowPolicy,
    transform: Option<Box<dyn ValueTransform>>,
    generations: Generations,
    scheduler: SelectionScheduler,
    needs_render: bool,
}

impl EditableController {
    /// `honors_keep_overflow` is false for native controls.
    pub fn new(options: EditableOptions, honors_keep_overflow: bool) -> Self {
        let overflow = options.overflow_policy(honors_keep_overflow);
        Self {
            state: EditableState::default(),
            options,
            overflow,
            transform: None,
            generations: Generations::default(),
            scheduler: SelectionScheduler::new(),
            needs_render: false,
        }
    }

    pub fn set_transform(&mut self, transform: impl ValueTransform + 'static) {
        self.transform = Some(Box::new(transform));
    }

    pub fn state(&self) -> &EditableState {
        &self.state
    }

    pub fn options(&self) -> &EditableOptions {
        &self.options
    }

    pub fn generations(&self) -> Generations {
        self.generations
    }

    pub fn scheduler(&self) -> &SelectionScheduler {
        &self.scheduler
    }

    /// Install the mount-time state. The surface is expected to show it already.
    pub fn seed(&mut self, state: EditableState) {
        self.state = state;
        self.needs_render = false;
        self.scheduler.cancel();
    }

    /// Synchronous half of an edit.
    ///
    /// Reads the surface text and selection (the committed caret when the
    /// surface has none), normalizes `event` (suppressing its default action),
    /// splices, applies the overflow policy, stamps a generation and calls the
    /// transform. Cut text goes to `clipboard` here. Returns `None` for no-op
    /// events.
    pub fn begin<H: HostSurface + ?Sized>(
        &mut self,
        event: &mut EditEvent,
        host: &H,
        clipboard: &mut dyn Clipboard,
    ) -> Result<Option<PendingEdit>, EditError> {
        let text = host.read_text()?;
        let selection = match host.read_selection()? {
            Some(live) => {
                let (selection, clamped) = live.clamp_to(&text);
                if clamped {
                    log::warn!(
                        target: "editable.pipeline",
                        "{}: selection outside text of length {}, clamped to {}..{}",
                        host.host_ref(),
                        text.len(),
                        selection.start,
                        selection.end
                    );
                }
                selection
            }
            None => {
                let (selection, _) = self.state.selection().clamp_to(&text);
                log::debug!(
                    target: "editable.pipeline",
                    "{}: no live selection, editing at committed caret {}..{}",
                    host.host_ref(),
                    selection.start,
                    selection.end
                );
                selection
            }
        };

        let snapshot = SurfaceSnapshot {
            text: &text,
            selection,
        };
        let Some(normalized) = normalize(event, snapshot, host.line_mode()) else {
            log::trace!(target: "editable.pipeline", "{}: no-op {:?}", host.host_ref(), event.kind());
            return Ok(None);
        };
        log::trace!(target: "editable.pipeline", "{}: {:?}", host.host_ref(), normalized.intent);

        if let Some(cut) = normalized.clipboard {
            clipboard.write_text(&cut);
        }

        let (adjusted, provisional) =
            prepare(&text, &normalized.intent, &self.overflow, host.numeric());
        let generation = self.generations.issue();

        Ok(Some(PendingEdit::start(
            generation,
            adjusted,
            provisional,
            host.change_source(event),
            self.transform.as_deref(),
        )))
    }

    /// Commit a resolved edit.
    ///
    /// A transform failure is returned as [`EditError::TransformRejected`]
    /// whatever the edit's generation, and leaves the state untouched. A stale
    /// edit under [`OrderingPolicy::RejectStale`](crate::OrderingPolicy) is
    /// dropped. Otherwise the state is replaced and, unless post-computing is
    /// prevented, a caret restoration is armed for the next [`reflect`](Self::reflect).
    pub fn commit(&mut self, resolved: ResolvedEdit) -> Result<CommitOutcome, EditError> {
        let ResolvedEdit {
            generation,
            provisional,
            adjusted_len,
            result,
        } = resolved;

        let value = result.map_err(|err| {
            log::warn!(target: "editable.pipeline", "edit #{generation} rejected by transform: {err}");
            EditError::TransformRejected(err)
        })?;

        if !self.generations.accepts(generation, self.options.ordering) {
            log::warn!(
                target: "editable.pipeline",
                "edit #{generation} is stale (latest #{}), discarded",
                self.generations.latest_issued()
            );
            return Ok(CommitOutcome::Stale { generation });
        }
        self.generations.mark_committed(generation);
        self.needs_render = true;

        if self.options.prevent_post_computing {
            self.state.value = value;
            self.state.clamp_caret();
            log::debug!(target: "editable.pipeline", "edit #{generation} committed without caret: {:?}", self.state);
            return Ok(CommitOutcome::Committed(self.state.clone()));
        }

        let caret = committed_caret(
            self.options.caret_policy,
            provisional,
            adjusted_len,
            value.rendered_len(),
        );
        self.state = EditableState::new(value, caret);
        if self.state.value.is_number() {
            // Number controls have no selection API.
            self.scheduler.cancel();
        } else {
            self.scheduler.arm(self.state.selection());
        }
        log::debug!(target: "editable.pipeline", "edit #{generation} committed: {:?}", self.state);
        Ok(CommitOutcome::Committed(self.state.clone()))
    }

    /// Reflect the committed state onto `host`, then run the scheduled caret
    /// restoration. Returns whether a restoration ran.
    pub fn reflect<H: HostSurface + ?Sized>(&mut self, host: &mut H) -> Result<bool, EditError> {
        if self.needs_render {
            host.write_text(&self.state.value)?;
            self.needs_render = false;
        }
        self.scheduler.run(host)
    }

    /// Run one edit to completion: begin, resolve, commit, reflect.
    pub async fn apply<H: HostSurface + ?Sized>(
        &mut self,
        event: &mut EditEvent,
        host: &mut H,
        clipboard: &mut dyn Clipboard,
    ) -> Result<CommitOutcome, EditError> {
        let Some(pending) = self.begin(event, &*host, clipboard)? else {
            return Ok(CommitOutcome::Skipped);
        };
        let resolved = pending.resolve().await;
        let outcome = self.commit(resolved)?;
        if matches!(outcome, CommitOutcome::Committed(_)) {
            self.reflect(host)?;
        }
        Ok(outcome)
    }
}
