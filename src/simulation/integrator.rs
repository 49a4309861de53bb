//! Fixed-step time integration for the N-body system
//!
//! Semi-implicit (symplectic) Euler: per body, the velocity is advanced
//! first and the *updated* velocity then advances the position. That
//! ordering is what distinguishes the scheme from explicit Euler and gives
//! it its long-run energy behavior

use super::states::{System, NVec2};

/// Advance the system by one step of size `dt`
///
/// `forces[i]` is the net force on `sys.bodies[i]`, computed from the
/// pre-step positions of the whole set — the full force pass happens before
/// any position moves, so there are no read-after-write hazards. For each
/// body:
/// 1. a = f / m
/// 2. v_n+1 = v_n + a * dt
/// 3. x_n+1 = x_n + v_n+1 * dt
pub fn semi_implicit_euler(sys: &mut System, forces: &[NVec2], dt: f64) {
    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        // Kick: velocity first
        let a = *f / b.m;
        b.v += a * dt;

        // Drift: position uses the just-updated velocity
        b.x += b.v * dt;
    }

    // Advance the system time by one full step
    sys.t += dt;
}
