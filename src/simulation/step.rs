//! Per-tick orchestration: integrate, read out, retire
//!
//! `tick` drives every live craft through one simulation step and applies
//! the two removal predicates. A craft is either live or removed; removal is
//! terminal, a retired craft gets no further steps and never reappears in a
//! report.
//!
//! While the world is paused the tick only recomputes readouts (`peek`);
//! positions and velocities stay frozen and nothing is removed.

use crate::simulation::states::{NVec2, World};
use crate::simulation::forces::CentralGravity;
use crate::simulation::integrator::{euler_step, peek, speed};
use crate::simulation::params::Parameters;

/// Why a craft was retired from the live set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCause {
    OutOfBounds, // left the viewport on either axis
    Collision, // closed within the planet's collision radius
}

/// Per-craft values the caller needs for rendering and readout
#[derive(Debug, Clone, Copy)]
pub struct CraftReadout {
    pub id: u64,
    pub x: NVec2, // display-space position
    pub speed: f64, // m/s
    pub distance_m: f64, // separation from the planet (m)
    pub force: f64, // gravitational force magnitude (N)
}

/// Everything one tick produces: readouts for every craft that was live at
/// the start of the tick (launch order), and the craft retired this tick
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub readouts: Vec<CraftReadout>,
    pub removed: Vec<(u64, RemovalCause)>, // launch order
}

/// True when a display-space position lies outside the viewport:
/// either axis below zero, or at/above the extent
pub fn out_of_bounds(x: &NVec2, params: &Parameters) -> bool {
    x.x < 0.0 || x.x >= params.width || x.y < 0.0 || x.y >= params.height
}

/// Advance the world by one tick
///
/// Running: every live craft is integrated in launch order, then the removal
/// predicates are evaluated: collision against the pre-move separation the
/// step computed, out-of-bounds against the post-move position. If both fire
/// on the same tick the collision is reported as the cause.
///
/// Paused: every live craft is peeked instead; no mutation, no removals.
pub fn tick(world: &mut World, gravity: &CentralGravity, params: &Parameters) -> TickReport {
    let mut readouts = Vec::with_capacity(world.crafts.len());
    let mut removed = Vec::new();

    if world.paused {
        for craft in &world.crafts {
            let (distance_m, force) = peek(craft, &world.planet, gravity, params);
            readouts.push(CraftReadout {
                id: craft.id,
                x: craft.x,
                speed: speed(craft, params),
                distance_m,
                force,
            });
        }
        return TickReport { readouts, removed };
    }

    // Read pass: integrate every craft and record who survives.
    // keep[i] mirrors crafts[i]; the collection itself is not touched yet
    let mut keep = Vec::with_capacity(world.crafts.len());
    for craft in &mut world.crafts {
        let r = euler_step(craft, &world.planet, gravity, params);

        readouts.push(CraftReadout {
            id: craft.id,
            x: craft.x,
            speed: r.speed,
            distance_m: r.distance_m,
            force: r.force,
        });

        let cause = if r.distance_m <= world.planet.radius {
            Some(RemovalCause::Collision)
        } else if out_of_bounds(&craft.x, params) {
            Some(RemovalCause::OutOfBounds)
        } else {
            None
        };

        if let Some(c) = cause {
            removed.push((craft.id, c));
        }
        keep.push(cause.is_none());
    }

    // Filter pass: rebuild the live set from the survivor flags
    let mut i = 0;
    world.crafts.retain(|_| {
        let k = keep[i];
        i += 1;
        k
    });

    world.tick += 1;
    TickReport { readouts, removed }
}
