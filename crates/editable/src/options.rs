//! Component configuration.
//!
//! Every field has a default, so an empty TOML table is a valid configuration.

use crate::error::ConfigError;
use input_core::OverflowPolicy;
use serde::Deserialize;

/// What to do with an edit whose transform resolves after a newer edit began.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Only the latest issued edit may commit; older ones are discarded.
    #[default]
    RejectStale,
    /// Every edit commits in the order its transform resolves.
    LastCommitWins,
}

/// Where the caret goes when the transform changes the value's length.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaretPolicy {
    /// Keep the caret computed from the edit, ignoring the transform output
    /// (clamped into the committed value).
    #[default]
    Provisional,
    /// Shift the provisional caret by the length the transform added or removed.
    FollowTransform,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EditableOptions {
    /// Maximum length in chars (numbers: maximum value). `None` disables it.
    pub max_length: Option<usize>,
    /// Content-editable only: keep overflowing text and just flag it.
    pub keep_overflow: bool,
    /// Commit values but never move the caret after a commit.
    pub prevent_post_computing: bool,
    /// Native control only: grow the control's height to fit its content.
    pub autosize: bool,
    /// Content-editable only: single-line container styling.
    pub linear: bool,
    pub placeholder: Option<String>,
    pub placeholder_css: Option<String>,
    /// Line height in px used by autosize.
    pub line_height: f32,
    pub ordering: OrderingPolicy,
    pub caret_policy: CaretPolicy,
}

impl Default for EditableOptions {
    fn default() -> Self {
        Self {
            max_length: None,
            keep_overflow: false,
            prevent_post_computing: false,
            autosize: false,
            linear: false,
            placeholder: None,
            placeholder_css: None,
            line_height: 20.0,
            ordering: OrderingPolicy::default(),
            caret_policy: CaretPolicy::default(),
        }
    }
}

impl EditableOptions {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Overflow policy for a host. Native controls always truncate.
    pub(crate) fn overflow_policy(&self, honors_keep_overflow: bool) -> OverflowPolicy {
        OverflowPolicy::new(
            self.max_length,
            honors_keep_overflow && self.keep_overflow,
        )
    }
}
