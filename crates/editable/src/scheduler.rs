//! Selection Restoration Scheduler.

use crate::error::EditError;
use crate::host::HostSurface;
use input_core::SelectionRange;

/// Holds at most one caret restoration, armed by a commit and consumed by the
/// next reflection of the surface. No retries, no debouncing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionScheduler {
    pending: Option<SelectionRange>,
}

impl SelectionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a restoration, replacing one that never ran.
    pub fn arm(&mut self, range: SelectionRange) {
        if let Some(prev) = self.pending.replace(range) {
            log::trace!(
                target: "editable.scheduler",
                "restoration {prev:?} superseded by {range:?}"
            );
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<SelectionRange> {
        self.pending
    }

    /// Apply the armed restoration to `host`. Returns whether one ran.
    ///
    /// The restoration is consumed even if the host write fails.
    pub fn run<H: HostSurface + ?Sized>(&mut self, host: &mut H) -> Result<bool, EditError> {
        let Some(range) = self.pending.take() else {
            return Ok(false);
        };
        host.write_selection(range)?;
        log::trace!(
            target: "editable.scheduler",
            "{}: restored selection {}..{}",
            host.host_ref(),
            range.start,
            range.end
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ControlKind, NativeControlHost};
    use input_core::{InputId, InputValueStore};

    #[test]
    fn runs_exactly_once_per_arm() {
        let mut store = InputValueStore::new();
        let id = InputId::from_raw(1);
        store.ensure_initial(id, "hello".to_string());

        let mut sched = SelectionScheduler::new();
        sched.arm(SelectionRange::caret(2));

        let mut host = NativeControlHost::new(&mut store, id, ControlKind::Text);
        assert!(sched.run(&mut host).unwrap());
        assert!(!sched.run(&mut host).unwrap());
        assert_eq!(store.selection(id), Some(SelectionRange::caret(2)));
    }

    #[test]
    fn restoring_the_same_caret_twice_does_not_drift() {
        let mut store = InputValueStore::new();
        let id = InputId::from_raw(1);
        store.ensure_initial(id, "hello".to_string());

        let mut sched = SelectionScheduler::new();
        for _ in 0..2 {
            sched.arm(SelectionRange::caret(3));
            let mut host = NativeControlHost::new(&mut store, id, ControlKind::Text);
            sched.run(&mut host).unwrap();
            assert_eq!(store.selection(id), Some(SelectionRange::caret(3)));
        }
    }

    #[test]
    fn failed_restoration_is_not_retried() {
        let mut store = InputValueStore::new();
        let mut sched = SelectionScheduler::new();
        sched.arm(SelectionRange::caret(0));

        let mut host = NativeControlHost::new(&mut store, InputId::from_raw(9), ControlKind::Text);
        assert!(sched.run(&mut host).is_err());
        assert_eq!(sched.pending(), None);
    }
}
