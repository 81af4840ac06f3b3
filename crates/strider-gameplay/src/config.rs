//! Navigation controller tuning parameters.
//!
//! All parameters are fixed configuration: they are read every tick but
//! never mutated at runtime. Configs are serialized as RON for
//! human-editable files.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key naming an agent's starting position, for lookup by external
/// persistence and scene-setup code.
pub const STARTING_POSITION_KEY: &str = "starting position";

/// Errors that can occur loading or validating navigation config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config text could not be parsed
    #[error("config parse failed: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Config could not be serialized
    #[error("config serialize failed: {0}")]
    Serialize(#[from] ron::Error),

    /// A field holds a value outside its valid range
    #[error("invalid config: {field} = {value}: {reason}")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// Value found
        value: f32,
        /// Why the value is rejected
        reason: &'static str,
    },
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for the locomotion state machine and interaction coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Fraction of the agent's stopping distance inside which the
    /// controller snaps to the destination and halts
    pub stop_distance_proportion: f32,
    /// Radius within which a ground click is snapped onto the navigable
    /// surface; clicks with no surface in range use the raw point
    pub surface_sample_radius: f32,
    /// Seconds input stays held after an interaction fires, before the
    /// locomotion check begins
    pub input_hold_delay: f32,
    /// Minimum desired-velocity magnitude at which facing follows the
    /// direction of travel
    pub turn_speed_threshold: f32,
    /// Damping time for the blended animation speed parameter
    pub speed_damp_time: f32,
    /// Manual approach speed while slowing, in units per second
    pub slowing_speed: f32,
    /// Facing interpolation factor while moving, applied per second
    pub turn_smoothing: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            stop_distance_proportion: 0.1,
            surface_sample_radius: 4.0,
            input_hold_delay: 0.5,
            turn_speed_threshold: 0.5,
            speed_damp_time: 0.1,
            slowing_speed: 0.175,
            turn_smoothing: 15.0,
        }
    }
}

impl NavigationConfig {
    /// Parses a config from RON text and validates it.
    pub fn from_ron_str(text: &str) -> ConfigResult<Self> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to pretty-printed RON.
    pub fn to_ron_string(&self) -> ConfigResult<String> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Checks every field against its valid range.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.stop_distance_proportion > 0.0 && self.stop_distance_proportion <= 1.0) {
            return Err(ConfigError::InvalidField {
                field: "stop_distance_proportion",
                value: self.stop_distance_proportion,
                reason: "must be in (0, 1]",
            });
        }
        if self.surface_sample_radius <= 0.0 {
            return Err(ConfigError::InvalidField {
                field: "surface_sample_radius",
                value: self.surface_sample_radius,
                reason: "must be positive",
            });
        }
        if self.input_hold_delay < 0.0 {
            return Err(ConfigError::InvalidField {
                field: "input_hold_delay",
                value: self.input_hold_delay,
                reason: "must not be negative",
            });
        }
        if self.turn_speed_threshold < 0.0 {
            return Err(ConfigError::InvalidField {
                field: "turn_speed_threshold",
                value: self.turn_speed_threshold,
                reason: "must not be negative",
            });
        }
        if self.speed_damp_time < 0.0 {
            return Err(ConfigError::InvalidField {
                field: "speed_damp_time",
                value: self.speed_damp_time,
                reason: "must not be negative",
            });
        }
        if self.slowing_speed <= 0.0 {
            return Err(ConfigError::InvalidField {
                field: "slowing_speed",
                value: self.slowing_speed,
                reason: "must be positive",
            });
        }
        if self.turn_smoothing <= 0.0 {
            return Err(ConfigError::InvalidField {
                field: "turn_smoothing",
                value: self.turn_smoothing,
                reason: "must be positive",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = NavigationConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.stop_distance_proportion - 0.1).abs() < f32::EPSILON);
        assert!((config.slowing_speed - 0.175).abs() < f32::EPSILON);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = NavigationConfig::default();
        let text = config.to_ron_string().expect("serialize");
        let parsed = NavigationConfig::from_ron_str(&text).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let parsed = NavigationConfig::from_ron_str("(slowing_speed: 0.3)").expect("parse");
        assert!((parsed.slowing_speed - 0.3).abs() < f32::EPSILON);
        assert!((parsed.input_hold_delay - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validation_rejects_bad_proportion() {
        let mut config = NavigationConfig::default();
        config.stop_distance_proportion = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidField {
                field: "stop_distance_proportion",
                ..
            })
        ));

        config.stop_distance_proportion = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_delay() {
        let text = "(input_hold_delay: -1.0)";
        assert!(NavigationConfig::from_ron_str(text).is_err());
    }

    #[test]
    fn test_starting_position_key_is_stable() {
        assert_eq!(STARTING_POSITION_KEY, "starting position");
    }
}
