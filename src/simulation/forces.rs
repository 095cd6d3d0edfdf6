//! Gravity of the fixed planet acting on launched craft
//!
//! Single-attractor Newtonian gravity: the planet pulls every craft, craft
//! pull nothing. There is no softening: the inclusive collision removal
//! retires a craft at the planet's collision radius, long before the
//! separation can degenerate.

use crate::simulation::states::{Craft, Planet};
use crate::simulation::params::Parameters;

/// Newtonian point-mass gravity of the planet
pub struct CentralGravity {
    pub G: f64, // gravitional constant
}

impl CentralGravity {
    /// Force magnitude from Newton's law of universal gravitation:
    /// F = G * m * M / d^2, with `distance_m` in meters
    pub fn force(&self, craft_m: f64, planet_m: f64, distance_m: f64) -> f64 {
        (self.G * craft_m * planet_m) / (distance_m * distance_m)
    }

    /// Physical separation (m) between a craft and the planet centre
    ///
    /// The stored positions are display-space, so the display-space
    /// magnitude goes through the scale conversion once
    pub fn distance_m(&self, craft: &Craft, planet: &Planet, params: &Parameters) -> f64 {
        let dx = planet.x.x - craft.x.x;
        let dy = planet.x.y - craft.x.y;
        let dist_px = (dx * dx + dy * dy).sqrt();
        params.to_physical(dist_px)
    }
}
