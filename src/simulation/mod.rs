pub mod states;
pub mod params;
pub mod engine;
pub mod integrator;
pub mod collision;
pub mod scenario;
pub mod session;
