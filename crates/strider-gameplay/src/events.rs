//! Click input plumbing.
//!
//! Host input code (pointer raycasting lives there, not here) can hand
//! resolved clicks to the controller directly, or queue them across the
//! frame boundary through [`ClickQueue`].

use crossbeam_channel::{bounded, Receiver, Sender};
use glam::Vec3;

use strider_common::InteractableId;

/// A pointer click resolved by the host's raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickEvent {
    /// Click on bare ground.
    Ground {
        /// World-space raycast hit position
        point: Vec3,
    },
    /// Click on an interactable object.
    Interactable {
        /// Handle of the clicked object
        id: InteractableId,
    },
}

/// Bounded queue carrying clicks from input code to the controller.
#[derive(Debug)]
pub struct ClickQueue {
    /// Sender for queueing clicks
    sender: Sender<ClickEvent>,
    /// Receiver drained once per tick
    receiver: Receiver<ClickEvent>,
    /// Channel capacity
    capacity: usize,
}

impl Default for ClickQueue {
    fn default() -> Self {
        Self::new(64)
    }
}

impl ClickQueue {
    /// Creates a queue with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self {
            sender,
            receiver,
            capacity,
        }
    }

    /// Returns a sender handle for input producers.
    #[must_use]
    pub fn sender(&self) -> Sender<ClickEvent> {
        self.sender.clone()
    }

    /// Queues a click. Non-blocking; the click is dropped when the queue
    /// is full.
    pub fn publish(&self, event: ClickEvent) {
        let _ = self.sender.try_send(event);
    }

    /// Drains all pending clicks in arrival order.
    #[must_use]
    pub fn drain(&self) -> Vec<ClickEvent> {
        self.receiver.try_iter().collect()
    }

    /// Returns the number of queued clicks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Returns the queue capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
