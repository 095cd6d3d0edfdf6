//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`PlanetConfig`]     – the fixed attractor
//! - [`LaunchConfig`]     – optional pre-seeded launch gestures
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   scale: 2.0e-7           # display pixels per meter
//!   vel_scale: 100.0        # gesture pixels per unit launch velocity
//!   craft_mass: 1000.0      # kg, given to every launched craft
//!   width: 1200.0           # viewport width in pixels
//!   height: 900.0           # viewport height in pixels
//!   t_rate: 60.0            # target ticks per second
//!   G: 6.6743e-11           # gravitational constant
//!
//! planet:
//!   x: [ 600.0, 450.0 ]     # display-space position, fixed for the run
//!   m: 1.898e27             # kg
//!   radius: 7.0e7           # collision radius in meters
//!
//! launches:                 # applied in order before the run starts
//!   - anchor: [ 600.0, 100.0 ]
//!     release: [ 650.0, 100.0 ]
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation; every constant is validated at build time.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub scale: f64, // display pixels per physical meter
    pub vel_scale: f64, // gesture pixels per unit of launch velocity
    pub craft_mass: f64, // default craft mass (kg)
    pub width: f64, // viewport width (display units)
    pub height: f64, // viewport height (display units)
    pub t_rate: f64, // target ticks per second
    pub G: f64, // gravitational constant
}

/// Configuration for the fixed attractor
#[derive(Deserialize, Debug)]
pub struct PlanetConfig {
    pub x: Vec<f64>, // display-space position, fixed for the run
    pub m: f64, // mass (kg)
    pub radius: f64, // collision radius (m)
}

/// A pre-seeded launch gesture, anchor and release points in display space
#[derive(Deserialize, Debug)]
pub struct LaunchConfig {
    pub anchor: Vec<f64>, // first click of the gesture
    pub release: Vec<f64>, // second click of the gesture
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub planet: PlanetConfig, // the fixed attractor
    #[serde(default)]
    pub launches: Vec<LaunchConfig>, // craft launched before the run starts
}
