//! Maximum-length enforcement.
//!
//! Text is truncated, numbers are clamped. The two are deliberately kept as
//! separate branches.

use crate::state::EditableValue;
use crate::text::{char_count, truncate_chars};

/// Length limit applied to every spliced value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverflowPolicy {
    /// Maximum length in chars (text) or maximum magnitude (numbers).
    /// `None` disables enforcement.
    pub max_length: Option<usize>,
    /// Keep overflowing text untruncated and only raise the flag.
    pub keep_overflow: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverflowResult {
    pub value: EditableValue,
    pub overflows: bool,
}

impl OverflowPolicy {
    pub fn new(max_length: Option<usize>, keep_overflow: bool) -> Self {
        Self {
            max_length,
            keep_overflow,
        }
    }

    pub fn apply(&self, value: EditableValue) -> OverflowResult {
        let Some(max) = self.max_length else {
            return OverflowResult {
                value,
                overflows: false,
            };
        };

        match value {
            EditableValue::Text(s) => {
                let overflows = char_count(&s) > max;
                let value = if overflows && !self.keep_overflow {
                    truncate_chars(&s, max).into_owned()
                } else {
                    s
                };
                OverflowResult {
                    value: EditableValue::Text(value),
                    overflows,
                }
            }
            EditableValue::Number(n) => {
                let limit = max as f64;
                let overflows = n > limit;
                OverflowResult {
                    value: EditableValue::Number(if overflows { limit } else { n }),
                    overflows,
                }
            }
        }
    }
}
