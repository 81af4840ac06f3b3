//! Handle types for objects owned by the host scene model.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for interactable handles.
static INTERACTABLE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Handle identifying an interactable object in the host scene.
///
/// The interactable's lifetime is managed by the external scene model, so
/// controllers hold this handle and look the object up on use rather than
/// keeping an owning reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractableId(u64);

impl InteractableId {
    /// Creates a new unique interactable handle.
    #[must_use]
    pub fn new() -> Self {
        Self(INTERACTABLE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Creates a handle from a raw value (for deserialization).
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Null/invalid handle.
    pub const NULL: Self = Self(0);

    /// Checks if this is a valid (non-null) handle.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for InteractableId {
    fn default() -> Self {
        Self::new()
    }
}
