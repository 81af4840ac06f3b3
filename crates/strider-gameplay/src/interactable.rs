//! Interactable objects and their registry.
//!
//! Interactables live in the host scene model; the controller addresses
//! them through [`InteractableId`] handles and this registry rather than
//! holding references, so a despawned object degrades to a missed lookup
//! instead of a dangling pointer.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use strider_common::InteractableId;

/// Errors for registry operations.
#[derive(Debug, Error)]
pub enum InteractableError {
    /// Interactable not found
    #[error("interactable not found: {0:?}")]
    NotFound(InteractableId),

    /// Handle already registered
    #[error("interactable already registered: {0:?}")]
    AlreadyRegistered(InteractableId),
}

/// Result type for registry operations.
pub type InteractableResult<T> = Result<T, InteractableError>;

/// Where an agent stands and faces while using an interactable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionAnchor {
    /// World-space position the agent walks to
    pub position: Vec3,
    /// Facing the agent snaps to on arrival
    pub rotation: Quat,
}

impl InteractionAnchor {
    /// Creates an anchor from position and facing.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Creates an anchor at `position` with identity facing.
    #[must_use]
    pub const fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }
}

/// Callback fired when an agent arrives at the interactable and interacts.
pub type InteractionCallback = Box<dyn FnMut(InteractableId) + Send>;

/// A scene object an agent can walk to and use.
pub struct Interactable {
    /// Interaction anchor
    anchor: InteractionAnchor,
    /// Callback fired on each interaction
    callback: Option<InteractionCallback>,
    /// Number of times this object has been interacted with
    interactions: u32,
}

impl fmt::Debug for Interactable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interactable")
            .field("anchor", &self.anchor)
            .field("has_callback", &self.callback.is_some())
            .field("interactions", &self.interactions)
            .finish()
    }
}

impl Interactable {
    /// Creates an interactable with no callback.
    #[must_use]
    pub fn new(anchor: InteractionAnchor) -> Self {
        Self {
            anchor,
            callback: None,
            interactions: 0,
        }
    }

    /// Sets the interaction callback.
    #[must_use]
    pub fn with_callback(mut self, callback: InteractionCallback) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Returns the interaction anchor.
    #[must_use]
    pub fn anchor(&self) -> InteractionAnchor {
        self.anchor
    }

    /// Returns how many times this object has been interacted with.
    #[must_use]
    pub fn interactions(&self) -> u32 {
        self.interactions
    }
}

/// Registry of interactables, addressed by handle.
#[derive(Debug, Default)]
pub struct InteractableRegistry {
    /// All registered interactables
    entries: HashMap<InteractableId, Interactable>,
}

impl InteractableRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an interactable under a freshly allocated handle.
    pub fn add(&mut self, interactable: Interactable) -> InteractableId {
        let id = InteractableId::new();
        self.entries.insert(id, interactable);
        id
    }

    /// Registers an interactable under an existing handle.
    pub fn register(
        &mut self,
        id: InteractableId,
        interactable: Interactable,
    ) -> InteractableResult<()> {
        if self.entries.contains_key(&id) {
            return Err(InteractableError::AlreadyRegistered(id));
        }
        self.entries.insert(id, interactable);
        Ok(())
    }

    /// Removes an interactable.
    pub fn remove(&mut self, id: InteractableId) -> InteractableResult<Interactable> {
        self.entries
            .remove(&id)
            .ok_or(InteractableError::NotFound(id))
    }

    /// Gets an interactable.
    #[must_use]
    pub fn get(&self, id: InteractableId) -> Option<&Interactable> {
        self.entries.get(&id)
    }

    /// Looks up an interactable's anchor.
    #[must_use]
    pub fn anchor(&self, id: InteractableId) -> Option<InteractionAnchor> {
        self.entries.get(&id).map(Interactable::anchor)
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: InteractableId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the number of registered interactables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fires `id`'s interaction callback once.
    ///
    /// Returns whether the interactable was found; a missing handle is a
    /// no-op, treated as "no interactable".
    pub fn interact(&mut self, id: InteractableId) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            debug!("interact on unknown interactable {:?}", id);
            return false;
        };
        entry.interactions += 1;
        if let Some(callback) = entry.callback.as_mut() {
            callback(id);
        }
        debug!("interacted with {:?} (count {})", id, entry.interactions);
        true
    }
}
