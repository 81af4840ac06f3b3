//! Animation runtime seam.

use glam::Vec3;

/// Classification tag on animation states.
///
/// The controller never inspects the host's animation graph; it only asks
/// whether the currently playing state carries a given tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationCategory(&'static str);

impl AnimationCategory {
    /// Ordinary walking/running/idle states, as opposed to
    /// special-purpose states such as interacting.
    pub const LOCOMOTION: Self = Self::new("Locomotion");

    /// Creates a category from a static tag name.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    /// Returns the tag name.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        self.0
    }
}

/// External animation blending runtime.
pub trait AnimationDriver {
    /// Writes the blended locomotion speed parameter, damped over
    /// `damp_time` with `dt` elapsed this tick.
    fn set_speed(&mut self, speed: f32, damp_time: f32, dt: f32);

    /// Root-motion displacement the playing animation produced over the
    /// last tick.
    fn root_motion(&self) -> Vec3;

    /// Whether the currently playing state belongs to `category`.
    fn in_category(&self, category: AnimationCategory) -> bool;
}
