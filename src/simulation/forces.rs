//! Force evaluation for the n-body engine
//!
//! Defines the pure per-body force sum and the two execution strategies,
//! sequential and worker-pool parallel, that realize the same contract:
//! fill `out[i]` with the net force on body `i`, in body order

use rayon::prelude::*;

use crate::simulation::states::{Body, System, NVec2};

/// Net Newtonian gravitational force on body `i` from every other body
///
/// Pure function of its inputs: reads an immutable snapshot of the body set
/// and touches no shared state, so it can be evaluated for every body
/// independently and in any order — the property the parallel strategy relies on
///
/// Self-interaction is excluded by index, never by comparing body state, so
/// two distinct bodies with identical state still attract each other
#[allow(non_snake_case)]
pub fn net_force(i: usize, bodies: &[Body], G: f64) -> NVec2 {
    // bi: the body the force acts on
    let bi = &bodies[i];
    let mut f = NVec2::zeros();

    for (j, bj) in bodies.iter().enumerate() {
        // Skip the target itself (by index)
        if j == i {
            continue;
        }

        // r is the displacement vector from i to j;
        // i feels a pull along +r
        let r = bj.x - bi.x;
        let dist = r.norm();

        // Coincident positions contribute nothing: the pair is skipped
        // rather than dividing by zero
        if dist == 0.0 {
            continue;
        }

        // Newton: |F| = G m_i m_j / d^2, directed along the unit vector r/d
        let force = G * bi.m * bj.m / (dist * dist);
        f += r * (force / dist);
    }

    f
}

/// Strategy for computing one full force pass over the body set
///
/// Contract: `out` has one slot per body; after the call `out[i]` holds the
/// net force on `sys.bodies[i]`, regardless of which thread computed it.
/// Every implementation must perform the same per-body summation (same order,
/// same floating semantics) so that strategies are interchangeable up to
/// floating accumulation noise
pub trait ForceStrategy {
    fn forces(&self, sys: &System, out: &mut [NVec2]);
}

/// Evaluate every body in declaration order on the calling thread
#[allow(non_snake_case)]
pub struct SequentialStrategy {
    pub G: f64, // gravitational constant
}

impl ForceStrategy for SequentialStrategy {
    fn forces(&self, sys: &System, out: &mut [NVec2]) {
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = net_force(i, &sys.bodies, self.G);
        }
    }
}

/// Fan the per-body evaluations out over a fixed-size worker pool
///
/// One task per body; each task writes its own slot of the ordered output
/// buffer, so no lock or shared accumulator is needed and results always land
/// in body order. The pool is built once and reused across passes
#[allow(non_snake_case)]
pub struct ParallelStrategy {
    pub G: f64, // gravitational constant
    pool: rayon::ThreadPool,
}

impl ParallelStrategy {
    /// Build a strategy with its own worker pool
    ///
    /// `workers == 0` sizes the pool to the available hardware parallelism
    #[allow(non_snake_case)]
    pub fn new(G: f64, workers: usize) -> Result<Self, rayon::ThreadPoolBuildError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?;
        Ok(Self { G, pool })
    }

    /// Number of workers in the pool
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl ForceStrategy for ParallelStrategy {
    fn forces(&self, sys: &System, out: &mut [NVec2]) {
        // The body set is immutable for the duration of the pass; workers
        // only write disjoint slots of `out`. A worker panic propagates out
        // of `install` and aborts the run — a missing per-body force would
        // make the step's integration undefined
        let bodies = &sys.bodies;
        let g = self.G;
        self.pool.install(|| {
            out.par_iter_mut().enumerate().for_each(|(i, slot)| {
                *slot = net_force(i, bodies, g);
            });
        });
    }
}
