//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - iteration count and fixed step size,
//! - gravitational constant `G`,
//! - comparator tolerance `epsilon`

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub n_steps: usize, // number of time steps
    pub dt: f64, // step size (s)
    pub G: f64, // gravitational constant
    pub epsilon: f64, // comparator tolerance (drift allowance, not precision)
}
