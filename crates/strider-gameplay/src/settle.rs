//! Post-interaction settle sequence.
//!
//! After an interaction fires, click input stays held for a fixed delay
//! and then until the animation runtime reports a locomotion state again.
//! The sequence is an explicit state machine advanced once per tick by the
//! controller's update; it never blocks the tick and has no cancellation,
//! so clicks during settle are rejected rather than queued.

use tracing::trace;

use crate::animation::{AnimationCategory, AnimationDriver};

/// Progress of the post-interaction input hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettleState {
    /// No settle in progress; input is handled normally.
    Idle,
    /// Holding input for a fixed delay after the interaction fired.
    WaitingDelay {
        /// Seconds left before the locomotion check starts
        remaining: f32,
    },
    /// Holding input until the playing animation is a locomotion state.
    /// If the animation never reports locomotion, input stays locked;
    /// that is expected, not a defect.
    WaitingForLocomotion,
}

impl SettleState {
    /// Starts the hold with the configured delay.
    #[must_use]
    pub fn begin(delay: f32) -> Self {
        trace!("settle started, holding input for {}s", delay);
        SettleState::WaitingDelay { remaining: delay }
    }

    /// Whether no settle is in progress.
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, SettleState::Idle)
    }

    /// Whether click input should currently be rejected.
    #[must_use]
    pub fn holds_input(self) -> bool {
        !self.is_idle()
    }

    /// Advances the sequence by one tick and returns the next state.
    ///
    /// The tick that exhausts the delay also performs the first locomotion
    /// check, so a short delay can hand input back in the same tick.
    #[must_use]
    pub fn advance<D: AnimationDriver + ?Sized>(self, dt: f32, animator: &D) -> Self {
        match self {
            SettleState::Idle => SettleState::Idle,
            SettleState::WaitingDelay { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    SettleState::WaitingDelay { remaining }
                } else if animator.in_category(AnimationCategory::LOCOMOTION) {
                    trace!("settle complete");
                    SettleState::Idle
                } else {
                    trace!("settle delay elapsed, waiting for locomotion");
                    SettleState::WaitingForLocomotion
                }
            },
            SettleState::WaitingForLocomotion => {
                if animator.in_category(AnimationCategory::LOCOMOTION) {
                    trace!("settle complete");
                    SettleState::Idle
                } else {
                    SettleState::WaitingForLocomotion
                }
            },
        }
    }
}
