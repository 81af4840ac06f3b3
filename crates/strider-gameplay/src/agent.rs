//! Path-following agent seam.

use glam::Vec3;

/// External path-following component driven by the controller.
///
/// The agent computes and follows routes across the host's navigable
/// surface; the controller only issues commands and reads path state. One
/// agent per controller, passed in by the caller each tick rather than
/// stored.
pub trait PathAgent {
    /// Whether a requested path has not been resolved yet.
    fn has_pending_path(&self) -> bool;

    /// Remaining distance along the current path.
    fn remaining_distance(&self) -> f32;

    /// Distance from the destination at which the agent begins to stop.
    fn stopping_distance(&self) -> f32;

    /// Velocity the agent wants to apply this tick.
    fn desired_velocity(&self) -> Vec3;

    /// Requests a path to `destination`.
    fn set_destination(&mut self, destination: Vec3);

    /// Halts path following.
    fn stop(&mut self);

    /// Resumes path following toward the current destination.
    fn resume(&mut self);

    /// Overrides the agent's velocity for this tick (root-motion feedback).
    fn set_velocity(&mut self, velocity: Vec3);

    /// Enables or disables the agent's own facing updates. The controller
    /// owns facing, so this is turned off at attach time.
    fn set_updates_rotation(&mut self, enabled: bool);
}
