//! Fixed-step time integration for a single craft
//!
//! Explicit first-order Euler with a unit timestep of one tick, driven by
//! `CentralGravity` and `Parameters`. One force evaluation per step; the
//! readout values (distance, force) come from the same evaluation the
//! velocity update uses.

use crate::simulation::states::{Craft, Planet};
use crate::simulation::forces::CentralGravity;
use crate::simulation::params::Parameters;

/// Derived values produced by one integration step
#[derive(Debug, Clone, Copy)]
pub struct StepReadout {
    pub distance_m: f64, // physical separation at the start of the step (m)
    pub force: f64, // gravitational force magnitude (N)
    pub speed: f64, // physical speed after the velocity update (m/s)
}

/// Advance one craft by one tick using explicit Euler
///
/// Precondition: the craft must not sit exactly on the planet centre
/// (`distance_m > 0`). The caller retires craft at the collision radius
/// before the separation can reach zero.
pub fn euler_step(
    craft: &mut Craft,
    planet: &Planet,
    gravity: &CentralGravity,
    params: &Parameters,
) -> StepReadout {
    // Displacement from craft to planet, display space
    let dx = planet.x.x - craft.x.x;
    let dy = planet.x.y - craft.x.y;
    let dist_px = (dx * dx + dy * dy).sqrt();

    // Convert the separation into meters for the force law
    let distance_m = params.to_physical(dist_px);
    debug_assert!(
        distance_m > 0.0,
        "craft on the planet centre; collision removal must fire first"
    );

    // F = G m M / d^2, then a = F / m
    // (the craft mass cancels: a = G M / d^2, as it should)
    let force = gravity.force(craft.m, planet.m, distance_m);
    let acceleration = force / craft.m;

    // Split the acceleration along the craft->planet direction
    let angle = dy.atan2(dx);
    let acc_x = acceleration * angle.cos();
    let acc_y = acceleration * angle.sin();

    // Kick: the scale factor carries the physical acceleration back into
    // display units so velocity stays in display units per tick. The source
    // program applies the conversion exactly this way; trajectory baselines
    // depend on it, so it stays.
    craft.v.x += acc_x * params.scale;
    craft.v.y += acc_y * params.scale;

    // Drift: one whole tick of velocity
    craft.x += craft.v;

    StepReadout {
        distance_m,
        force,
        speed: speed(craft, params),
    }
}

/// Distance/force readout with no state mutation
///
/// Used every paused tick so the on-screen numbers stay live while motion is
/// frozen. Idempotent: repeated calls with unchanged inputs return identical
/// values.
pub fn peek(
    craft: &Craft,
    planet: &Planet,
    gravity: &CentralGravity,
    params: &Parameters,
) -> (f64, f64) {
    let distance_m = gravity.distance_m(craft, planet, params);
    debug_assert!(
        distance_m > 0.0,
        "craft on the planet centre; collision removal must fire first"
    );

    let force = gravity.force(craft.m, planet.m, distance_m);
    (distance_m, force)
}

/// Physical speed (m/s) derived from the craft's display-space velocity
pub fn speed(craft: &Craft, params: &Parameters) -> f64 {
    let v_px = (craft.v.x * craft.v.x + craft.v.y * craft.v.y).sqrt();
    params.to_physical(v_px)
}
