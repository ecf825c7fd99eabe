//! Tunable game parameters.
//!
//! All distances are in world pixels, speeds in px/s, accelerations in px/s²
//! and the spawn interval in milliseconds. The defaults are the classic
//! 400x600 tuning.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Reasons a [`GameConfig`] cannot be used to build a simulation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` must be a finite value greater than zero")]
    NonPositive { field: &'static str },

    #[error("`{field}` = {value} is out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error(
        "pipe gap {gap} leaves no room to place pipes \
         (gap center would need to lie in [{min_center}, {max_center}])"
    )]
    GapTooLarge {
        gap: f64,
        min_center: f64,
        max_center: f64,
    },
}

/// Every constant the simulation reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // World
    pub world_width: f64,
    pub world_height: f64,
    /// Thickness of the ground strip reserved at the bottom of the world.
    pub ground_height: f64,

    // Bird
    pub bird_x: f64,
    pub bird_radius: f64,
    /// Horizontal speed used only to derive the display rotation.
    pub rotation_reference_speed: f64,

    // Physics
    pub gravity: f64,
    /// Velocity the bird is set to on a flap (negative = upward).
    pub flap_impulse: f64,
    pub max_fall_speed: f64,
    /// Upper bound for a single tick's elapsed time, in seconds.
    pub max_frame_dt: f64,

    // Pipes
    pub pipe_width: f64,
    pub pipe_gap: f64,
    pub pipe_interval_ms: f64,
    pub pipe_speed: f64,
    /// Minimum distance between the ceiling and the top of a gap.
    pub spawn_margin_top: f64,
    /// Minimum distance between the bottom of a gap and the ground.
    pub spawn_margin_bottom: f64,
    /// How far past the right edge new pipes appear.
    pub spawn_offset_x: f64,
    /// How far past the left edge a pipe's trailing edge must travel before removal.
    pub despawn_margin: f64,

    // Decoration
    pub cloud_drift_speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 400.0,
            world_height: 600.0,
            ground_height: 100.0,

            bird_x: 100.0,
            bird_radius: 16.0,
            rotation_reference_speed: 400.0,

            gravity: 1500.0,
            flap_impulse: -420.0,
            max_fall_speed: 900.0,
            max_frame_dt: 1.0 / 30.0,

            pipe_width: 60.0,
            pipe_gap: 150.0,
            pipe_interval_ms: 1400.0,
            pipe_speed: 180.0,
            spawn_margin_top: 40.0,
            spawn_margin_bottom: 40.0,
            spawn_offset_x: 20.0,
            despawn_margin: 50.0,

            cloud_drift_speed: 10.0,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field })
    }
}

impl GameConfig {
    /// Load a (possibly partial) JSON config and validate it.
    ///
    /// Fields missing from the file keep their default values.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Y coordinate of the top of the ground strip.
    pub fn floor_y(&self) -> f64 {
        self.world_height - self.ground_height
    }

    /// Vertical start position of the bird's center.
    pub fn bird_start_y(&self) -> f64 {
        self.world_height / 2.0
    }

    /// Inclusive range the gap center is drawn from when spawning a pipe.
    pub fn gap_center_range(&self) -> (f64, f64) {
        let half_gap = self.pipe_gap / 2.0;
        let min_center = self.spawn_margin_top + half_gap;
        let max_center = self.floor_y() - self.spawn_margin_bottom - half_gap;
        (min_center, max_center)
    }

    /// Check the config describes a playable world.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("bird_radius", self.bird_radius)?;
        positive("rotation_reference_speed", self.rotation_reference_speed)?;
        positive("max_fall_speed", self.max_fall_speed)?;
        positive("max_frame_dt", self.max_frame_dt)?;
        positive("pipe_width", self.pipe_width)?;
        positive("pipe_gap", self.pipe_gap)?;
        positive("pipe_interval_ms", self.pipe_interval_ms)?;
        positive("pipe_speed", self.pipe_speed)?;

        if !(self.ground_height >= 0.0 && self.ground_height < self.world_height) {
            return Err(ConfigError::OutOfRange {
                field: "ground_height",
                value: self.ground_height,
                reason: "must be at least 0 and less than world_height",
            });
        }
        if !(self.gravity.is_finite() && self.gravity >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "gravity",
                value: self.gravity,
                reason: "must be finite and not negative",
            });
        }
        if !(self.flap_impulse.is_finite() && self.flap_impulse < 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "flap_impulse",
                value: self.flap_impulse,
                reason: "must be negative (upward)",
            });
        }
        for (field, value) in [
            ("spawn_margin_top", self.spawn_margin_top),
            ("spawn_margin_bottom", self.spawn_margin_bottom),
            ("spawn_offset_x", self.spawn_offset_x),
            ("despawn_margin", self.despawn_margin),
            ("cloud_drift_speed", self.cloud_drift_speed),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    reason: "must be finite and not negative",
                });
            }
        }
        if !(self.bird_x - self.bird_radius >= 0.0
            && self.bird_x + self.bird_radius <= self.world_width)
        {
            return Err(ConfigError::OutOfRange {
                field: "bird_x",
                value: self.bird_x,
                reason: "bird must start fully inside the world horizontally",
            });
        }
        if self.bird_start_y() + self.bird_radius > self.floor_y() {
            return Err(ConfigError::OutOfRange {
                field: "bird_radius",
                value: self.bird_radius,
                reason: "bird would start below the ground",
            });
        }

        let (min_center, max_center) = self.gap_center_range();
        if min_center > max_center {
            return Err(ConfigError::GapTooLarge {
                gap: self.pipe_gap,
                min_center,
                max_center,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_gap_center_range() {
        let (min, max) = GameConfig::default().gap_center_range();
        assert!((min - 115.0).abs() < f64::EPSILON);
        assert!((max - 385.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_floor_y() {
        assert!((GameConfig::default().floor_y() - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gap_larger_than_playable_span_rejected() {
        let config = GameConfig {
            pipe_gap: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapTooLarge { .. })
        ));
    }

    #[test]
    fn test_gap_exactly_filling_span_is_allowed() {
        // 500 floor - 40 - 40 margins = 420 usable
        let config = GameConfig {
            pipe_gap: 420.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let (min, max) = config.gap_center_range();
        assert!((min - max).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_fields_rejected() {
        let config = GameConfig {
            bird_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "bird_radius"
            })
        ));

        let config = GameConfig {
            pipe_speed: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "pipe_speed"
            })
        ));
    }

    #[test]
    fn test_upward_flap_required() {
        let config = GameConfig {
            flap_impulse: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "flap_impulse",
                ..
            })
        ));
    }

    #[test]
    fn test_ground_must_leave_room() {
        let config = GameConfig {
            ground_height: 600.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "ground_height",
                ..
            })
        ));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "gravity": 1200.0 }"#).unwrap();
        assert!((config.gravity - 1200.0).abs() < f64::EPSILON);
        assert!((config.pipe_gap - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_json_file_missing_is_io_error() {
        let path = std::env::temp_dir().join("flappy_missing_config_98765.json");
        assert!(matches!(
            GameConfig::from_json_file(&path),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_from_json_file_invalid_values() {
        let path = std::env::temp_dir().join("flappy_invalid_config_test.json");
        fs::write(&path, r#"{ "pipe_gap": 1000.0 }"#).unwrap();
        let result = GameConfig::from_json_file(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::GapTooLarge { .. })));
    }

    #[test]
    fn test_from_json_file_garbage_is_parse_error() {
        let path = std::env::temp_dir().join("flappy_garbage_config_test.json");
        fs::write(&path, "not json").unwrap();
        let result = GameConfig::from_json_file(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
