//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – execution strategy selection and worker count
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`OutputsConfig`]    – trajectory artifact paths
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   strategy: "both"        # "sequential", "parallel", or "both"
//!   workers: 0              # parallel pool size, 0/absent -> hardware parallelism
//!
//! parameters:
//!   n_steps: 500            # number of time steps
//!   dt: 21600.0             # step size in seconds
//!   G: 6.67430e-11          # gravitational constant (SI)
//!   epsilon: 1.0e5          # comparator tolerance
//!
//! outputs:
//!   seq_csv: outputs/nbody_seq.csv
//!   par_csv: outputs/nbody_par.csv
//!
//! bodies:
//!   - name: "Sun"
//!     m: 1.989e30
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!   - name: "Earth"
//!     m: 5.972e24
//!     x: [ 1.496e11, 0.0 ]
//!     v: [ 0.0, 29780.0 ]
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation, rejecting malformed configurations before any simulation
//! starts.

use serde::Deserialize;
use thiserror::Error;

/// Which execution strategy the engine runs
/// `strategy: "sequential"`, `"parallel"`, or `"both"`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum StrategyConfig {
    #[serde(rename = "sequential")] // one thread of control, bodies in order
    Sequential,

    #[serde(rename = "parallel")] // worker-pool fan-out, one task per body
    Parallel,

    #[serde(rename = "both")] // run both and compare the trajectories
    Both,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub strategy: StrategyConfig, // which strategy (or both) runs the scenario
    pub workers: Option<usize>, // parallel pool size; absent -> hardware parallelism
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    pub n_steps: usize, // iteration count
    pub dt: f64,        // step size in seconds
    #[serde(default = "default_g")]
    pub G: f64,         // gravitational constant
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,   // comparator tolerance
}

fn default_g() -> f64 {
    6.67430e-11
}

fn default_epsilon() -> f64 {
    1.0e5
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String, // identifier, unique within the scenario
    pub m: f64,       // mass in kg
    pub x: Vec<f64>,  // initial position [x, y] in meters
    pub v: Vec<f64>,  // initial velocity [vx, vy] in meters/second
}

/// Where recorded trajectories are written
#[derive(Deserialize, Debug, Clone)]
pub struct OutputsConfig {
    #[serde(default = "default_seq_csv")]
    pub seq_csv: String, // sequential trajectory artifact
    #[serde(default = "default_par_csv")]
    pub par_csv: String, // parallel trajectory artifact
}

fn default_seq_csv() -> String {
    "outputs/nbody_seq.csv".to_string()
}

fn default_par_csv() -> String {
    "outputs/nbody_par.csv".to_string()
}

impl Default for OutputsConfig {
    fn default() -> Self {
        Self {
            seq_csv: default_seq_csv(),
            par_csv: default_par_csv(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // strategy selection and worker count
    pub parameters: ParametersConfig, // numerical and physical parameters
    #[serde(default)]
    pub outputs: OutputsConfig, // artifact paths
    pub bodies: Vec<BodyConfig>, // initial state of the system
}

/// Rejected scenario configurations
///
/// All of these are detected while building the runtime scenario, before the
/// first simulation step runs
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario defines no bodies")]
    EmptyBodySet,

    #[error("body `{name}` has non-positive mass {m}")]
    NonPositiveMass { name: String, m: f64 },

    #[error("duplicate body name `{0}`")]
    DuplicateName(String),

    #[error("body `{name}` {field} must have exactly 2 components, got {len}")]
    BadComponentCount {
        name: String,
        field: &'static str,
        len: usize,
    },

    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    #[error("iteration count must be positive")]
    ZeroIterations,

    #[error("gravitational constant must be positive and finite, got {0}")]
    BadGravitationalConstant(f64),

    #[error("comparator tolerance must be non-negative and finite, got {0}")]
    BadEpsilon(f64),
}
