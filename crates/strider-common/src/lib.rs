//! # Strider Common
//!
//! Common types and shared abstractions for the Strider navigation
//! controller.
//!
//! This crate provides foundational types used across Strider subsystems:
//! - ID/handle types (`InteractableId`)
//! - Body pose (`Transform`) and steering math helpers
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod ids;
pub mod transform;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::transform::*;
}

pub use prelude::*;
