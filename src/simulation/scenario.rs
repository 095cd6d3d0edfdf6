//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - the force law (`CentralGravity`)
//! - world state (`World` with the planet and any pre-seeded launches)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics and visualization systems.
//!
//! Construction is the one place invalid input can appear. Every constant
//! is validated here and a bad scenario file is rejected with a descriptive
//! error instead of surfacing later as a degenerate trajectory.

use anyhow::{bail, Result};
use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::forces::CentralGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Planet, World};

/// Bevy resource representing a fully-initialized scenario
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub gravity: CentralGravity,
    pub world: World,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            scale: p_cfg.scale,
            vel_scale: p_cfg.vel_scale,
            craft_mass: p_cfg.craft_mass,
            width: p_cfg.width,
            height: p_cfg.height,
            t_rate: p_cfg.t_rate,
            G: p_cfg.G,
        };

        if parameters.scale <= 0.0 {
            bail!("scale must be positive, got {}", parameters.scale);
        }
        if parameters.vel_scale <= 0.0 {
            bail!("vel_scale must be positive, got {}", parameters.vel_scale);
        }
        if parameters.craft_mass <= 0.0 {
            bail!("craft_mass must be positive, got {}", parameters.craft_mass);
        }
        if parameters.width <= 0.0 || parameters.height <= 0.0 {
            bail!(
                "viewport extents must be positive, got {} x {}",
                parameters.width,
                parameters.height
            );
        }
        if parameters.t_rate <= 0.0 {
            bail!("t_rate must be positive, got {}", parameters.t_rate);
        }
        if parameters.G <= 0.0 {
            bail!("G must be positive, got {}", parameters.G);
        }

        // Planet: map PlanetConfig -> runtime Planet using nalgebra vectors
        let planet = Planet {
            x: NVec2::new(cfg.planet.x[0], cfg.planet.x[1]),
            m: cfg.planet.m,
            radius: cfg.planet.radius,
        };

        if planet.m <= 0.0 {
            bail!("planet mass must be positive, got {}", planet.m);
        }
        if planet.radius <= 0.0 {
            bail!("planet collision radius must be positive, got {}", planet.radius);
        }

        // Force law from the validated constants
        let gravity = CentralGravity { G: parameters.G };

        // World state with any pre-seeded launches, applied in file order
        let mut world = World::new(planet);
        for l in &cfg.launches {
            world.launch(
                NVec2::new(l.anchor[0], l.anchor[1]),
                NVec2::new(l.release[0], l.release[1]),
                &parameters,
            );
        }

        Ok(Self {
            parameters,
            gravity,
            world,
        })
    }
}
