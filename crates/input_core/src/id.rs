//! Opaque identifier for native form controls held in an [`InputValueStore`](crate::InputValueStore).
//!
//! The store never looks inside the id. Integration layers map their own node
//! handles (e.g. `dom::Id`) onto it at the boundary.

/// Key of a single native form control inside an [`InputValueStore`](crate::InputValueStore).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(u64);

impl InputId {
    /// Create an `InputId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<u32> for InputId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "input#{}", self.0)
    }
}
