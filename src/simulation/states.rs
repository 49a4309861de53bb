//! Core state types for the N-body simulation.
//!
//! Defines the body/system structs and the recorded trajectory:
//! - `Body` — one named point mass using `NVec2`
//! - `System` — the authoritative body set and the current time `t`
//! - `Trajectory` — one owned snapshot of the body set per completed step

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // identifier, unique within a run
    pub m: f64, // mass (kg), immutable across the run
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, declaration order
    pub t: f64, // time (s)
}

/// Ordered history of body snapshots, one per completed step.
///
/// Every snapshot has the same length and the same sequence of names as the
/// initial body set. Snapshots are appended once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub steps: Vec<Vec<Body>>,
}

impl Trajectory {
    /// Create an empty trajectory
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append one snapshot (a clone of the body set after a completed step)
    pub fn push(&mut self, snapshot: Vec<Body>) {
        self.steps.push(snapshot);
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new()
    }
}
