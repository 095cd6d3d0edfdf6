//! Core state types for the slingshot simulation.
//!
//! Defines the fixed attractor, the launched craft, and the world they live in:
//! - `Planet` - the single massive body, immovable for the whole run
//! - `Craft`  - a launched body whose trajectory the planet's gravity bends
//! - `World`  - the live craft collection plus the global pause flag
//!
//! The world owns every craft exclusively; craft never interact with each
//! other, only with the planet.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

use crate::simulation::params::Parameters;

#[derive(Debug, Clone)]
pub struct Planet {
    pub x: NVec2, // position, display space (fixed after construction)
    pub m: f64, // mass (kg)
    pub radius: f64, // collision radius (m)
}

#[derive(Debug, Clone)]
pub struct Craft {
    pub id: u64, // stable handle assigned at launch
    pub x: NVec2, // position, display space
    pub v: NVec2, // velocity, display units per tick
    pub m: f64, // mass (kg), constant for the craft's lifetime
}

/// The whole mutable simulation state, threaded explicitly through every
/// tick: the planet, the live craft in launch order, and the pause flag.
#[derive(Debug, Clone)]
pub struct World {
    pub planet: Planet,
    pub crafts: Vec<Craft>, // live set, insertion order = launch order
    pub paused: bool,
    pub tick: u64, // completed non-paused ticks
    next_id: u64,
}

impl World {
    pub fn new(planet: Planet) -> Self {
        Self {
            planet,
            crafts: Vec::new(),
            paused: false,
            tick: 0,
            next_id: 0,
        }
    }

    /// Launch a craft from a completed two-click gesture.
    ///
    /// The craft starts at `anchor` with velocity `(release - anchor) /
    /// vel_scale` and the configured default mass. Returns the stable id
    /// assigned to it.
    pub fn launch(&mut self, anchor: NVec2, release: NVec2, params: &Parameters) -> u64 {
        let v = NVec2::new(
            (release.x - anchor.x) / params.vel_scale,
            (release.y - anchor.y) / params.vel_scale,
        );

        let id = self.next_id;
        self.next_id += 1;

        self.crafts.push(Craft {
            id,
            x: anchor,
            v,
            m: params.craft_mass,
        });

        id
    }

    /// Flip the global pause flag and return the new state.
    /// Toggling twice in succession restores the original state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}
