//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - artifact paths (`OutputsConfig`)
//!
//! Malformed configurations are rejected here, before the first step runs:
//! a bad initial configuration is a defect, not something to discover mid-run

use std::collections::HashSet;

use crate::configuration::config::{BodyConfig, OutputsConfig, ScenarioConfig, ScenarioError};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// A fully-initialized, validated runtime scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// engine settings, parameters, and the initial system state, consumed by the
/// driver and the recording layer
#[derive(Debug)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub outputs: OutputsConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        let p_cfg = &cfg.parameters;

        // Parameter checks first: these are global defects
        if p_cfg.n_steps == 0 {
            return Err(ScenarioError::ZeroIterations);
        }
        if !(p_cfg.dt > 0.0) {
            return Err(ScenarioError::NonPositiveTimeStep(p_cfg.dt));
        }
        if !(p_cfg.G > 0.0 && p_cfg.G.is_finite()) {
            return Err(ScenarioError::BadGravitationalConstant(p_cfg.G));
        }
        if !(p_cfg.epsilon >= 0.0 && p_cfg.epsilon.is_finite()) {
            return Err(ScenarioError::BadEpsilon(p_cfg.epsilon));
        }

        if cfg.bodies.is_empty() {
            return Err(ScenarioError::EmptyBodySet);
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors,
        // checking each one on the way
        let mut seen = HashSet::new();
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for bc in &cfg.bodies {
            bodies.push(build_body(bc, &mut seen)?);
        }

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        let parameters = Parameters {
            n_steps: p_cfg.n_steps,
            dt: p_cfg.dt,
            G: p_cfg.G,
            epsilon: p_cfg.epsilon,
        };

        let engine = Engine {
            strategy: cfg.engine.strategy.clone(),
            workers: cfg.engine.workers.unwrap_or(0),
        };

        Ok(Self {
            engine,
            parameters,
            system,
            outputs: cfg.outputs,
        })
    }
}

fn build_body(bc: &BodyConfig, seen: &mut HashSet<String>) -> Result<Body, ScenarioError> {
    if !(bc.m > 0.0) {
        return Err(ScenarioError::NonPositiveMass {
            name: bc.name.clone(),
            m: bc.m,
        });
    }
    if !seen.insert(bc.name.clone()) {
        return Err(ScenarioError::DuplicateName(bc.name.clone()));
    }
    if bc.x.len() != 2 {
        return Err(ScenarioError::BadComponentCount {
            name: bc.name.clone(),
            field: "position",
            len: bc.x.len(),
        });
    }
    if bc.v.len() != 2 {
        return Err(ScenarioError::BadComponentCount {
            name: bc.name.clone(),
            field: "velocity",
            len: bc.v.len(),
        });
    }

    Ok(Body {
        name: bc.name.clone(),
        m: bc.m,
        x: NVec2::new(bc.x[0], bc.x[1]),
        v: NVec2::new(bc.v[0], bc.v[1]),
    })
}
