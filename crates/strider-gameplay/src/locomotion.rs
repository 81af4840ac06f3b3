//! Locomotion state selection.
//!
//! One state is selected per simulation tick from the path agent's
//! readings, in a fixed priority order with first match winning. Selection
//! is kept pure so the thresholds can be tested directly.

use serde::{Deserialize, Serialize};

use crate::config::NavigationConfig;

/// Per-tick behavior of the locomotion state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocomotionState {
    /// The agent has not resolved its path yet; nothing is updated this
    /// tick, including the animation speed parameter.
    PathPending,
    /// Within the snap threshold of the destination: halt and snap.
    Stopping,
    /// Within stopping distance: manual approach at the slowing speed.
    Slowing,
    /// Under way fast enough for facing to follow the direction of travel.
    Moving,
    /// Following the path with no position or rotation overrides.
    Coasting,
}

impl LocomotionState {
    /// Whether this state halts the agent's own steering.
    #[must_use]
    pub fn halts_agent(self) -> bool {
        matches!(self, LocomotionState::Stopping | LocomotionState::Slowing)
    }

    /// Whether this state marks arrival at the destination.
    #[must_use]
    pub fn is_arrival(self) -> bool {
        matches!(self, LocomotionState::Stopping)
    }
}

/// Selects the locomotion state for this tick.
///
/// Thresholds are inclusive: a remaining distance exactly at a boundary
/// selects the nearer (higher-priority) state.
#[must_use]
pub fn select_state(
    pending: bool,
    remaining_distance: f32,
    stopping_distance: f32,
    desired_speed: f32,
    config: &NavigationConfig,
) -> LocomotionState {
    if pending {
        LocomotionState::PathPending
    } else if remaining_distance <= stopping_distance * config.stop_distance_proportion {
        LocomotionState::Stopping
    } else if remaining_distance <= stopping_distance {
        LocomotionState::Slowing
    } else if desired_speed > config.turn_speed_threshold {
        LocomotionState::Moving
    } else {
        LocomotionState::Coasting
    }
}

/// Blended approach speed while slowing.
///
/// Interpolates from `slowing_speed` at the outer edge of the stopping
/// range down to zero at the destination.
#[must_use]
pub fn slowing_speed_at(
    remaining_distance: f32,
    stopping_distance: f32,
    slowing_speed: f32,
) -> f32 {
    let proportion = 1.0 - remaining_distance / stopping_distance;
    lerp(slowing_speed, 0.0, proportion)
}

/// Linear interpolation with the parameter clamped to [0, 1].
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config() -> NavigationConfig {
        NavigationConfig::default()
    }

    #[test]
    fn test_pending_wins_over_everything() {
        let state = select_state(true, 0.0, 1.0, 10.0, &config());
        assert_eq!(state, LocomotionState::PathPending);
    }

    #[test]
    fn test_stopping_boundary_is_inclusive() {
        // remaining == stopping_distance * 0.1 exactly selects Stopping.
        let state = select_state(false, 0.1, 1.0, 10.0, &config());
        assert_eq!(state, LocomotionState::Stopping);

        let state = select_state(false, 0.100001, 1.0, 10.0, &config());
        assert_eq!(state, LocomotionState::Slowing);
    }

    #[test]
    fn test_slowing_boundary_is_inclusive() {
        let state = select_state(false, 1.0, 1.0, 10.0, &config());
        assert_eq!(state, LocomotionState::Slowing);
    }

    #[test]
    fn test_moving_requires_speed_above_threshold() {
        let state = select_state(false, 5.0, 1.0, 0.6, &config());
        assert_eq!(state, LocomotionState::Moving);

        // Exactly at the threshold is not enough.
        let state = select_state(false, 5.0, 1.0, 0.5, &config());
        assert_eq!(state, LocomotionState::Coasting);
    }

    #[test]
    fn test_slowing_speed_endpoints() {
        let at_edge = slowing_speed_at(1.0, 1.0, 0.175);
        assert!((at_edge - 0.175).abs() < 1e-6);

        let at_destination = slowing_speed_at(0.0, 1.0, 0.175);
        assert!(at_destination.abs() < 1e-6);
    }

    proptest! {
        /// Every input selects a state, and the documented priority holds.
        #[test]
        fn prop_selection_follows_priority(
            pending in proptest::bool::ANY,
            remaining in 0.0f32..100.0,
            stopping in 0.01f32..10.0,
            speed in 0.0f32..20.0,
        ) {
            let cfg = config();
            let state = select_state(pending, remaining, stopping, speed, &cfg);

            if pending {
                prop_assert_eq!(state, LocomotionState::PathPending);
            } else if remaining <= stopping * cfg.stop_distance_proportion {
                prop_assert_eq!(state, LocomotionState::Stopping);
            } else if remaining <= stopping {
                prop_assert_eq!(state, LocomotionState::Slowing);
            } else if speed > cfg.turn_speed_threshold {
                prop_assert_eq!(state, LocomotionState::Moving);
            } else {
                prop_assert_eq!(state, LocomotionState::Coasting);
            }
        }

        /// Slowing speed decreases monotonically as the agent closes in and
        /// stays strictly inside (0, slowing_speed) between the thresholds.
        #[test]
        fn prop_slowing_speed_is_monotonic(
            stopping in 0.5f32..10.0,
            near in 0.11f32..0.98,
            step in 0.001f32..0.01,
        ) {
            let slowing_speed = 0.175f32;
            let far = (near + step).min(0.99);

            let speed_far = slowing_speed_at(far * stopping, stopping, slowing_speed);
            let speed_near = slowing_speed_at(near * stopping, stopping, slowing_speed);

            prop_assert!(speed_near <= speed_far);
            prop_assert!(speed_near > 0.0);
            prop_assert!(speed_far < slowing_speed);
        }
    }
}
