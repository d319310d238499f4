//! Session configuration
//!
//! Every constant the simulation reads is overridable here. Defaults match
//! `crate::consts`; a JSON file may override any subset of fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::*;
use crate::error::{Result, SimError};

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Target tick rate; the fixed step is `1 / frames_per_second`
    pub frames_per_second: u32,

    // === Bouncers ===
    pub bouncer_count: usize,
    /// Side length range (inclusive)
    pub bouncer_min_size: u32,
    pub bouncer_max_size: u32,
    /// Velocity component magnitude range (inclusive, never zero)
    pub bouncer_min_speed: u32,
    pub bouncer_max_speed: u32,
    /// Sprite drawn for every bouncer
    pub bouncer_image: PathBuf,

    // === Mover ===
    pub mover_size: f32,
    /// Pixels per key press
    pub mover_speed: f32,
    /// Degrees added to rotation each tick
    pub mover_rotation_step: f32,
    /// Also react to left/right keys
    pub mover_horizontal: bool,

    // === Grower ===
    pub grower_size: f32,
    /// Scale multiplier per click inside the grower
    pub grower_rate: f32,
    /// Grow both axes instead of x only
    pub grower_uniform: bool,

    // === Colors ===
    pub background: Color,
    pub highlight: Color,
    pub mover_color: Color,
    pub grower_color: Color,

    /// RNG seed for bouncer placement
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: ARENA_SIZE,
            arena_height: ARENA_SIZE,
            frames_per_second: FRAMES_PER_SECOND,

            bouncer_count: NUM_BOUNCERS,
            bouncer_min_size: BOUNCER_MIN_SIZE,
            bouncer_max_size: BOUNCER_MAX_SIZE,
            bouncer_min_speed: BOUNCER_MIN_SPEED,
            bouncer_max_speed: BOUNCER_MAX_SPEED,
            bouncer_image: PathBuf::from(BOUNCER_IMAGE),

            mover_size: MOVER_SIZE,
            mover_speed: MOVER_SPEED,
            mover_rotation_step: MOVER_ROTATION_STEP,
            mover_horizontal: false,

            grower_size: GROWER_SIZE,
            grower_rate: GROWER_RATE,
            grower_uniform: false,

            background: Color::AZURE,
            highlight: Color::OLIVEDRAB,
            mover_color: Color::PLUM,
            grower_color: Color::BISQUE,

            seed: 0,
        }
    }
}

impl Config {
    /// Fixed simulation timestep in seconds
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.frames_per_second as f32
    }

    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Read a JSON config file, falling back to defaults if it can't be read
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    /// Check setup preconditions. A config that passes can always spawn
    /// `bouncer_count` bouncers fully inside the arena.
    pub fn validate(&self) -> Result<()> {
        if self.frames_per_second == 0 {
            return Err(SimError::invalid("frames_per_second", "must be non-zero"));
        }

        if self.bouncer_min_size == 0 || self.bouncer_min_size > self.bouncer_max_size {
            return Err(SimError::invalid(
                "bouncer_min_size",
                format!(
                    "size range [{}, {}] must be non-empty and positive",
                    self.bouncer_min_size, self.bouncer_max_size
                ),
            ));
        }

        if self.bouncer_min_speed == 0 || self.bouncer_min_speed > self.bouncer_max_speed {
            return Err(SimError::invalid(
                "bouncer_min_speed",
                format!(
                    "speed range [{}, {}] must be non-empty and exclude zero",
                    self.bouncer_min_speed, self.bouncer_max_speed
                ),
            ));
        }

        // Spawn position is inset by the bouncer's size on both sides
        let min_extent = 2.0 * self.bouncer_max_size as f32;
        if !(self.arena_width.is_finite() && self.arena_width >= min_extent) {
            return Err(SimError::invalid(
                "arena_width",
                format!("{} is smaller than {min_extent}", self.arena_width),
            ));
        }
        if !(self.arena_height.is_finite() && self.arena_height >= min_extent) {
            return Err(SimError::invalid(
                "arena_height",
                format!("{} is smaller than {min_extent}", self.arena_height),
            ));
        }

        if !(self.grower_rate.is_finite() && self.grower_rate > 1.0) {
            return Err(SimError::invalid(
                "grower_rate",
                format!("{} must be greater than 1", self.grower_rate),
            ));
        }

        if !(self.mover_size > 0.0 && self.grower_size > 0.0) {
            return Err(SimError::invalid("shape_size", "shapes must have positive size"));
        }

        if !(self.mover_speed.is_finite() && self.mover_speed >= 0.0) {
            return Err(SimError::invalid("mover_speed", "must be finite and non-negative"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bouncer_count, 5);
        assert!((config.sim_dt() - 1.0 / 60.0).abs() < 1e-7);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json_str(r#"{ "bouncer_count": 12, "seed": 7 }"#).unwrap();
        assert_eq!(config.bouncer_count, 12);
        assert_eq!(config.seed, 7);
        assert_eq!(config.arena_width, ARENA_SIZE);
        assert_eq!(config.highlight, Color::OLIVEDRAB);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Config::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SimError::ConfigParse(_)));
    }

    #[test]
    fn test_arena_smaller_than_bouncer_is_rejected() {
        let config = Config {
            arena_width: 50.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidConfiguration {
                field: "arena_width",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_speed_range_is_rejected() {
        let config = Config {
            bouncer_min_speed: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_growth_rate_must_grow() {
        let config = Config {
            grower_rate: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            Config::load(&missing),
            Err(SimError::ConfigIo { .. })
        ));
        let config = Config::load_or_default(Some(missing.as_path()));
        assert_eq!(config.bouncer_count, NUM_BOUNCERS);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bounce.json");
        std::fs::write(&path, r#"{ "arena_width": 640.0, "grower_uniform": true }"#).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.arena_width, 640.0);
        assert!(config.grower_uniform);
    }
}
