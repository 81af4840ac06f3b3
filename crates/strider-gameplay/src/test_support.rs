//! Scripted doubles for the controller's external collaborators.

use glam::Vec3;

use crate::agent::PathAgent;
use crate::animation::{AnimationCategory, AnimationDriver};
use crate::surface::NavigableSurface;

/// Path agent double with scripted readings and recorded commands.
#[derive(Debug, Default)]
pub(crate) struct ScriptedAgent {
    pub pending: bool,
    pub remaining: f32,
    pub stopping: f32,
    pub desired: Vec3,
    pub destination: Option<Vec3>,
    pub stopped: bool,
    pub resumes: u32,
    pub fed_velocity: Option<Vec3>,
    pub updates_rotation: Option<bool>,
}

impl ScriptedAgent {
    /// Agent travelling with plenty of path left.
    pub fn en_route(desired: Vec3) -> Self {
        Self {
            remaining: 10.0,
            stopping: 1.0,
            desired,
            ..Self::default()
        }
    }

    /// Agent inside the snap threshold of its destination.
    pub fn arriving() -> Self {
        Self {
            remaining: 0.05,
            stopping: 1.0,
            ..Self::default()
        }
    }
}

impl PathAgent for ScriptedAgent {
    fn has_pending_path(&self) -> bool {
        self.pending
    }

    fn remaining_distance(&self) -> f32 {
        self.remaining
    }

    fn stopping_distance(&self) -> f32 {
        self.stopping
    }

    fn desired_velocity(&self) -> Vec3 {
        self.desired
    }

    fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
    }

    fn stop(&mut self) {
        self.stopped = true;
    }

    fn resume(&mut self) {
        self.stopped = false;
        self.resumes += 1;
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.fed_velocity = Some(velocity);
    }

    fn set_updates_rotation(&mut self, enabled: bool) {
        self.updates_rotation = Some(enabled);
    }
}

/// Animation runtime double reporting a fixed category.
#[derive(Debug)]
pub(crate) struct ScriptedAnimator {
    pub locomotion: bool,
    pub root_motion: Vec3,
    pub last_speed: Option<f32>,
    pub last_damp: Option<f32>,
}

impl ScriptedAnimator {
    /// Animator whose current state carries the locomotion tag.
    pub fn in_locomotion() -> Self {
        Self {
            locomotion: true,
            root_motion: Vec3::ZERO,
            last_speed: None,
            last_damp: None,
        }
    }

    /// Animator stuck in a non-locomotion (interacting) state.
    pub fn interacting() -> Self {
        Self {
            locomotion: false,
            ..Self::in_locomotion()
        }
    }
}

impl AnimationDriver for ScriptedAnimator {
    fn set_speed(&mut self, speed: f32, damp_time: f32, _dt: f32) {
        self.last_speed = Some(speed);
        self.last_damp = Some(damp_time);
    }

    fn root_motion(&self) -> Vec3 {
        self.root_motion
    }

    fn in_category(&self, category: AnimationCategory) -> bool {
        category == AnimationCategory::LOCOMOTION && self.locomotion
    }
}

/// Surface double that snaps to a single scripted point when in range.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSurface {
    pub point: Option<Vec3>,
}

impl ScriptedSurface {
    /// Surface with one valid point.
    pub fn snapping_to(point: Vec3) -> Self {
        Self { point: Some(point) }
    }

    /// Surface with no valid points anywhere.
    pub fn empty() -> Self {
        Self { point: None }
    }
}

impl NavigableSurface for ScriptedSurface {
    fn sample(&self, point: Vec3, radius: f32) -> Option<Vec3> {
        self.point.filter(|candidate| candidate.distance(point) <= radius)
    }
}
