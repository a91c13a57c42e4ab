//! Runtime parameters for a demo session
//!
//! `Parameters` holds:
//! - the speed multiplier applied to every velocity and its allowed range,
//! - the factor used by the faster/slower controls,
//! - the frame rate of the loop and the optional bail-out timer

use std::time::Duration;

pub const DEFAULT_SPEED_MIN: f64 = 0.2;
pub const DEFAULT_SPEED_MAX: f64 = 5.0;
pub const DEFAULT_SPEED_FACTOR: f64 = 1.25;
pub const DEFAULT_FRAME_RATE: f64 = 60.0;
pub const DEFAULT_BAILOUT_SECS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub speed_scale: f64, // current speed multiplier
    pub speed_min: f64, // lower clamp for speed_scale
    pub speed_max: f64, // upper clamp for speed_scale
    pub speed_factor: f64, // step used by faster/slower
    pub frame_rate: f64, // frames per second
    pub bailout: Option<Duration>, // wall-clock limit, None = run until quit
}

impl Parameters {
    /// Seconds of wall time one frame represents
    pub fn frame_period(&self) -> Duration {
        period_for(self.frame_rate)
            .unwrap_or_else(|| Duration::from_secs_f64(1.0 / DEFAULT_FRAME_RATE))
    }

    /// `speed_scale` clamped into `[speed_min, speed_max]`
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        speed.clamp(self.speed_min, self.speed_max)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            speed_scale: 1.0,
            speed_min: DEFAULT_SPEED_MIN,
            speed_max: DEFAULT_SPEED_MAX,
            speed_factor: DEFAULT_SPEED_FACTOR,
            frame_rate: DEFAULT_FRAME_RATE,
            bailout: Some(Duration::from_secs_f64(DEFAULT_BAILOUT_SECS)),
        }
    }
}

/// Frame period for `frame_rate`, or `None` if no non-zero `Duration` represents it
pub fn period_for(frame_rate: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(1.0 / frame_rate)
        .ok()
        .filter(|d| !d.is_zero())
}
