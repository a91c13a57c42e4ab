//! Configuration types for loading demo scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`BoundsConfig`]     – playfield size in pixels
//! - [`ParametersConfig`] – speed multiplier, its controls, frame rate, bail-out
//! - [`EngineConfig`]     – which stages run each frame
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The two-ball collision demo:
//!
//! ```yaml
//! bounds:
//!   width: 320
//!   height: 240
//!
//! parameters:          # optional, every field has a default
//!   speed_scale: 1.0   # initial multiplier
//!   speed_min: 0.2
//!   speed_max: 5.0
//!   speed_factor: 1.25 # faster/slower step
//!   frame_rate: 60.0
//!   bailout_secs: 30.0 # omit or null to run until quit
//!
//! engine:              # optional
//!   collisions: true
//!
//! bodies:
//!   - x: [ 112.0, 120.0 ]
//!     v: [   2.5,   1.8 ]
//!     radius: 12.0
//!     color: [ 255, 0, 0 ]
//!   - x: [ 208.0, 120.0 ]
//!     v: [  -1.8,  -2.2 ]
//!     radius: 12.0
//!     color: [ 0, 128, 255 ]
//! ```
//!
//! [`crate::Scenario::build_scenario`] validates the configuration and maps it
//! into the runtime types.

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::params::{
    DEFAULT_BAILOUT_SECS, DEFAULT_FRAME_RATE, DEFAULT_SPEED_FACTOR, DEFAULT_SPEED_MAX,
    DEFAULT_SPEED_MIN,
};

/// Playfield size
#[derive(Deserialize, Debug, Clone)]
pub struct BoundsConfig {
    pub width: f64, // pixels
    pub height: f64, // pixels
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self { width: 320.0, height: 240.0 }
    }
}

/// Speed and timing parameters of a session
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub speed_scale: f64, // initial speed multiplier
    pub speed_min: f64, // slowest allowed multiplier
    pub speed_max: f64, // fastest allowed multiplier
    pub speed_factor: f64, // multiplier step of the faster/slower controls
    pub frame_rate: f64, // frames per second
    pub bailout_secs: Option<f64>, // stop after this many seconds
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            speed_scale: 1.0,
            speed_min: DEFAULT_SPEED_MIN,
            speed_max: DEFAULT_SPEED_MAX,
            speed_factor: DEFAULT_SPEED_FACTOR,
            frame_rate: DEFAULT_FRAME_RATE,
            bailout_secs: Some(DEFAULT_BAILOUT_SECS),
        }
    }
}

/// Frame pipeline options
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub collisions: bool, // resolve body-body contacts after each step
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { collisions: true }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position in pixels
    pub v: Vec<f64>, // initial velocity in pixels per frame
    pub radius: f64, // disc radius in pixels
    #[serde(default = "default_color")]
    pub color: [u8; 3], // display colour
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub bounds: BoundsConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    pub bodies: Vec<BodyConfig>, // initial state of the system
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Reasons a scenario is rejected before a session starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("playfield must be positive, got {width} x {height}")]
    Bounds { width: f64, height: f64 },

    #[error("body {index}: {field} needs 2 components, got {len}")]
    Arity { index: usize, field: &'static str, len: usize },

    #[error("body {index}: {field} is not finite")]
    NotFinite { index: usize, field: &'static str },

    #[error("body {index}: radius must be positive, got {radius}")]
    Radius { index: usize, radius: f64 },

    #[error("body {index}: radius {radius} does not fit a {width} x {height} playfield")]
    RadiusTooLarge { index: usize, radius: f64, width: f64, height: f64 },

    #[error("parameter {field} is not finite, got {value}")]
    ParameterNotFinite { field: &'static str, value: f64 },

    #[error("speed range [{min}, {max}] is invalid")]
    SpeedRange { min: f64, max: f64 },

    #[error("speed factor must be greater than 1, got {0}")]
    SpeedFactor(f64),

    #[error("frame rate must give a non-zero frame period, got {0}")]
    FrameRate(f64),

    #[error("bail-out must be a non-negative number of seconds, got {0}")]
    Bailout(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_sections_take_defaults() {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  - x: [10.0, 20.0]\n    v: [1.0, 0.0]\n    radius: 5.0\n",
        )
        .unwrap();

        assert_eq!(cfg.bounds.width, 320.0);
        assert_eq!(cfg.bounds.height, 240.0);
        assert_eq!(cfg.parameters.speed_factor, DEFAULT_SPEED_FACTOR);
        assert_eq!(cfg.parameters.bailout_secs, Some(DEFAULT_BAILOUT_SECS));
        assert!(cfg.engine.collisions);
        assert_eq!(cfg.bodies[0].color, [255, 255, 255]);
    }

    #[test]
    fn null_bailout_means_no_limit() {
        let cfg = ScenarioConfig::from_yaml_str(
            "parameters:\n  bailout_secs: null\nbodies: []\n",
        )
        .unwrap();

        assert_eq!(cfg.parameters.bailout_secs, None);
        assert_eq!(cfg.parameters.speed_scale, 1.0);
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = ScenarioConfig::from_yaml_str("bodies: [ {x: oops} ]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
