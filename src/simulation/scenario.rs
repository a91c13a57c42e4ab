//! Build fully-initialized demo scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) or a built-in `Preset` and produces
//! the runtime bundle `Scenario` containing:
//! - playfield size (`Bounds`)
//! - speed and timing parameters (`Parameters`)
//! - frame pipeline settings (`Engine`)
//! - system state (`System` with bodies at frame 0)
//!
//! A `Session` owns one of these and steps it every frame

use std::time::Duration;

use clap::ValueEnum;

use crate::configuration::config::{BodyConfig, ConfigError, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::params::{period_for, Parameters};
use crate::simulation::states::{Body, Bounds, NVec2, Rgb, System};

/// The lab demos this crate ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// one ball bouncing off the walls
    Bounce,
    /// two independent balls at different speeds
    TwoBounce,
    /// two balls with elastic collisions
    TwoCollide,
}

/// Runtime bundle describing one demo
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub bounds: Bounds,
    pub parameters: Parameters,
    pub engine: Engine,
    pub system: System,
}

impl Scenario {
    /// Validate `cfg` and map it into runtime types
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let b_cfg = cfg.bounds;
        if !(b_cfg.width > 0.0 && b_cfg.height > 0.0 && b_cfg.width.is_finite() && b_cfg.height.is_finite()) {
            return Err(ConfigError::Bounds { width: b_cfg.width, height: b_cfg.height });
        }
        let bounds = Bounds::new(b_cfg.width, b_cfg.height);

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(index, bc)| build_body(index, bc, bounds))
            .collect::<Result<Vec<Body>, ConfigError>>()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        for (field, value) in [
            ("speed_scale", p_cfg.speed_scale),
            ("speed_min", p_cfg.speed_min),
            ("speed_max", p_cfg.speed_max),
            ("speed_factor", p_cfg.speed_factor),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::ParameterNotFinite { field, value });
            }
        }
        if !(p_cfg.speed_min > 0.0 && p_cfg.speed_min <= p_cfg.speed_max) {
            return Err(ConfigError::SpeedRange { min: p_cfg.speed_min, max: p_cfg.speed_max });
        }
        if !(p_cfg.speed_factor > 1.0) {
            return Err(ConfigError::SpeedFactor(p_cfg.speed_factor));
        }
        // Fixed-step timers need a representable, non-zero period
        if !(p_cfg.frame_rate > 0.0) || period_for(p_cfg.frame_rate).is_none() {
            return Err(ConfigError::FrameRate(p_cfg.frame_rate));
        }
        let bailout = match p_cfg.bailout_secs {
            Some(secs) => match Duration::try_from_secs_f64(secs) {
                Ok(limit) => Some(limit),
                Err(_) => return Err(ConfigError::Bailout(secs)),
            },
            None => None,
        };
        let mut parameters = Parameters {
            speed_scale: p_cfg.speed_scale,
            speed_min: p_cfg.speed_min,
            speed_max: p_cfg.speed_max,
            speed_factor: p_cfg.speed_factor,
            frame_rate: p_cfg.frame_rate,
            bailout,
        };
        parameters.speed_scale = parameters.clamp_speed(parameters.speed_scale);

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            collisions: cfg.engine.collisions,
        };

        Ok(Self {
            bounds,
            parameters,
            engine,
            system: System::new(bodies),
        })
    }

    /// Scenario for one of the built-in demos
    pub fn preset(preset: Preset) -> Self {
        // positions are laid out for the default 320x240 playfield
        let bounds = Bounds::default();
        let (w, h) = (bounds.width, bounds.height);
        let radius = 12.0;

        let (bodies, collisions) = match preset {
            Preset::Bounce => (
                vec![Body::new(NVec2::new(w / 2.0, h / 2.0), NVec2::new(3.0, 2.0), radius)
                    .with_color(Rgb::RED)],
                false,
            ),
            Preset::TwoBounce => (
                vec![
                    Body::new(NVec2::new((w / 3.0).floor(), (h / 3.0).floor()), NVec2::new(3.0, 2.0), radius)
                        .with_color(Rgb::RED),
                    Body::new(
                        NVec2::new((2.0 * w / 3.0).floor(), (2.0 * h / 3.0).floor()),
                        NVec2::new(-2.0, -3.0),
                        radius,
                    )
                    .with_color(Rgb::BLUE),
                ],
                false,
            ),
            Preset::TwoCollide => (
                vec![
                    Body::new(NVec2::new(112.0, 120.0), NVec2::new(2.5, 1.8), radius)
                        .with_color(Rgb::RED),
                    Body::new(NVec2::new(208.0, 120.0), NVec2::new(-1.8, -2.2), radius)
                        .with_color(Rgb::BLUE),
                ],
                true,
            ),
        };

        Self {
            bounds,
            parameters: Parameters::default(),
            engine: Engine { collisions },
            system: System::new(bodies),
        }
    }
}

fn build_body(index: usize, bc: &BodyConfig, bounds: Bounds) -> Result<Body, ConfigError> {
    let x = vec2(index, "x", &bc.x)?;
    let v = vec2(index, "v", &bc.v)?;

    if !bc.radius.is_finite() {
        return Err(ConfigError::NotFinite { index, field: "radius" });
    }
    if bc.radius <= 0.0 {
        return Err(ConfigError::Radius { index, radius: bc.radius });
    }
    // the clamp range [r, w - r] collapses once the disc spans half the field
    if bc.radius >= bounds.width / 2.0 || bc.radius >= bounds.height / 2.0 {
        return Err(ConfigError::RadiusTooLarge {
            index,
            radius: bc.radius,
            width: bounds.width,
            height: bounds.height,
        });
    }

    let [r, g, b] = bc.color;
    Ok(Body::new(x, v, bc.radius).with_color(Rgb(r, g, b)))
}

fn vec2(index: usize, field: &'static str, raw: &[f64]) -> Result<NVec2, ConfigError> {
    match raw {
        [a, b] if a.is_finite() && b.is_finite() => Ok(NVec2::new(*a, *b)),
        [_, _] => Err(ConfigError::NotFinite { index, field }),
        _ => Err(ConfigError::Arity { index, field, len: raw.len() }),
    }
}
