//! The external value transform (`onChange`).

use crate::error::TransformError;
use dom::Id;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use input_core::{EditEventKind, EditableValue};
use std::future::Future;

/// Where the edit came from, handed to the transform as context.
///
/// Native controls report the event, free-form surfaces report the node.
#[derive(Clone, Debug, PartialEq)]
pub enum ChangeSource {
    Event(EditEventKind),
    Target(Id),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChangeStats {
    pub overflows: bool,
    pub source: ChangeSource,
}

pub type TransformFuture = LocalBoxFuture<'static, Result<EditableValue, TransformError>>;

/// Rewrites a value before it is committed. May suspend; may fail.
pub trait ValueTransform {
    fn transform(&self, value: EditableValue, stats: ChangeStats) -> TransformFuture;
}

impl<F, Fut> ValueTransform for F
where
    F: Fn(EditableValue, ChangeStats) -> Fut,
    Fut: Future<Output = Result<EditableValue, TransformError>> + 'static,
{
    fn transform(&self, value: EditableValue, stats: ChangeStats) -> TransformFuture {
        self(value, stats).boxed_local()
    }
}
