//! Body pose and steering math helpers.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World-space pose of an agent body: position plus facing.
///
/// The navigation controller owns this pose and the host engine reads it
/// back for rendering; the path agent's own rotation updates are disabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Facing rotation in world space
    pub rotation: Quat,
}

impl Transform {
    /// Creates a transform from position and rotation.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Creates a transform at `position` with identity rotation.
    #[must_use]
    pub const fn from_position(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// Returns the forward direction of the current facing.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_position(Vec3::ZERO)
    }
}

/// Moves `current` toward `target` by at most `max_delta`, without
/// overshooting the target.
#[must_use]
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_delta || distance <= f32::EPSILON {
        target
    } else {
        current + to_target / distance * max_delta
    }
}

/// Rotation that faces along `forward` with world-up as the up reference.
///
/// Returns `None` when `forward` is too short to define a direction or
/// points straight up/down (no horizontal component to build a basis from);
/// callers keep their current facing in that case.
#[must_use]
pub fn look_rotation(forward: Vec3) -> Option<Quat> {
    let fwd = forward.try_normalize()?;
    let right = Vec3::Y.cross(fwd).try_normalize()?;
    let up = fwd.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, fwd)))
}
