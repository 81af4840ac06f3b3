//! # Strider Gameplay
//!
//! Point-and-click navigation control for a single agent hosted inside a
//! larger game runtime.
//!
//! This crate provides the control logic only:
//! - Locomotion state machine blending path velocity into animation speed
//! - Interaction coordination with a post-interaction input hold
//! - Click input plumbing (direct entry points and a cross-frame queue)
//! - Trait seams for the host's path agent, animation runtime, and
//!   navigable surface
//!
//! Pathfinding, animation blending, rendering, and input raycasting stay
//! in the host engine behind the seams.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod agent;
pub mod animation;
pub mod config;
pub mod controller;
pub mod events;
pub mod interactable;
pub mod locomotion;
pub mod settle;
pub mod surface;

#[cfg(test)]
pub(crate) mod test_support;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::agent::*;
    pub use crate::animation::*;
    pub use crate::config::*;
    pub use crate::controller::*;
    pub use crate::events::*;
    pub use crate::interactable::*;
    pub use crate::locomotion::*;
    pub use crate::settle::*;
    pub use crate::surface::*;
    pub use strider_common::prelude::*;
}

pub use prelude::*;
