pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, Bounds, System, NVec2, Rgb};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::integrator::{step, advance};
pub use simulation::collision::{in_contact, resolve_collision, resolve_collisions};
pub use simulation::scenario::{Scenario, Preset};
pub use simulation::session::{Session, Command, Mode};

pub use configuration::config::{ScenarioConfig, BodyConfig, BoundsConfig, ParametersConfig, EngineConfig, ConfigError};

pub use visualization::bouncesim_vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
