//! Change Pipeline: splice, overflow, transform, commit.
//!
//! An edit is split up so the transform can suspend without holding the
//! controller: [`prepare`] runs synchronously against the surface snapshot,
//! [`PendingEdit::start`] calls the transform, [`PendingEdit::resolve`] awaits
//! it, and the controller commits the [`ResolvedEdit`] if its generation is
//! still acceptable.

use crate::error::TransformError;
use crate::options::{CaretPolicy, OrderingPolicy};
use crate::transform::{ChangeSource, ChangeStats, TransformFuture, ValueTransform};
use futures::FutureExt;
use futures::future;
use input_core::{EditIntent, EditableValue, OverflowPolicy, OverflowResult, SelectionRange};

/// Per-controller edit stamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generations {
    issued: u64,
    committed: Option<u64>,
}

impl Generations {
    /// Stamp a new edit. Generations start at 1.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn latest_issued(&self) -> u64 {
        self.issued
    }

    pub fn last_committed(&self) -> Option<u64> {
        self.committed
    }

    pub fn accepts(&self, generation: u64, policy: OrderingPolicy) -> bool {
        match policy {
            OrderingPolicy::RejectStale => generation == self.issued,
            OrderingPolicy::LastCommitWins => true,
        }
    }

    pub fn mark_committed(&mut self, generation: u64) {
        self.committed = Some(generation);
    }
}

/// Splice `intent` into `text`. Numeric surfaces get a number back when the
/// result parses as one.
pub fn splice_value(text: &str, intent: &EditIntent, numeric: bool) -> EditableValue {
    let spliced = intent.apply(text);
    if numeric {
        if let Ok(n) = spliced.trim().parse::<f64>() {
            if n.is_finite() {
                return EditableValue::Number(n);
            }
        }
    }
    EditableValue::Text(spliced)
}

/// Splice, apply the length policy and place the provisional caret.
pub fn prepare(
    text: &str,
    intent: &EditIntent,
    policy: &OverflowPolicy,
    numeric: bool,
) -> (OverflowResult, SelectionRange) {
    let spliced = splice_value(text, intent, numeric);
    let adjusted = policy.apply(spliced);
    let provisional = SelectionRange::caret(intent.provisional_caret());
    (adjusted, provisional)
}

/// Where the committed caret goes.
///
/// `adjusted_len` is the length before the transform, `committed_len` after.
/// The result is clamped again by [`EditableState::new`](input_core::EditableState::new).
pub fn committed_caret(
    policy: CaretPolicy,
    provisional: SelectionRange,
    adjusted_len: usize,
    committed_len: usize,
) -> SelectionRange {
    match policy {
        CaretPolicy::Provisional => provisional,
        CaretPolicy::FollowTransform => {
            let shift = |at: usize| {
                if committed_len >= adjusted_len {
                    at + (committed_len - adjusted_len)
                } else {
                    at.saturating_sub(adjusted_len - committed_len)
                }
            };
            SelectionRange::new(shift(provisional.start), shift(provisional.end))
        }
    }
}

/// A normalized, spliced, policy-checked edit waiting for its transform.
///
/// The transform has already been called when this exists; only its result
/// is outstanding.
pub struct PendingEdit {
    generation: u64,
    adjusted: OverflowResult,
    provisional: SelectionRange,
    outcome: TransformFuture,
}

impl PendingEdit {
    /// Hand the policy-adjusted value to `transform` (identity when absent).
    pub fn start(
        generation: u64,
        adjusted: OverflowResult,
        provisional: SelectionRange,
        source: ChangeSource,
        transform: Option<&dyn ValueTransform>,
    ) -> Self {
        let outcome = match transform {
            Some(transform) => {
                let stats = ChangeStats {
                    overflows: adjusted.overflows,
                    source,
                };
                transform.transform(adjusted.value.clone(), stats)
            }
            None => future::ready(Ok(adjusted.value.clone())).boxed_local(),
        };
        Self {
            generation,
            adjusted,
            provisional,
            outcome,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Value after the overflow policy, before the transform.
    pub fn adjusted_value(&self) -> &EditableValue {
        &self.adjusted.value
    }

    pub fn provisional_caret(&self) -> SelectionRange {
        self.provisional
    }

    /// Wait for the transform. This is the only place an edit suspends.
    pub async fn resolve(self) -> ResolvedEdit {
        let result = self.outcome.await;
        ResolvedEdit {
            generation: self.generation,
            provisional: self.provisional,
            adjusted_len: self.adjusted.value.rendered_len(),
            result,
        }
    }
}

/// Outcome of a transform, ready to be committed.
#[derive(Debug)]
pub struct ResolvedEdit {
    pub(crate) generation: u64,
    pub(crate) provisional: SelectionRange,
    pub(crate) adjusted_len: usize,
    pub(crate) result: Result<EditableValue, TransformError>,
}

impl ResolvedEdit {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
