pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Planet, Craft, World, NVec2};
pub use simulation::forces::CentralGravity;
pub use simulation::integrator::{euler_step, peek, speed, StepReadout};
pub use simulation::step::{tick, out_of_bounds, TickReport, CraftReadout, RemovalCause};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, PlanetConfig, LaunchConfig};

pub use visualization::vis2d::run_2d;
