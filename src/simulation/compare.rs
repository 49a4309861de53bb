//! Numerical equivalence check between two recorded trajectories
//!
//! Declares two trajectories compatible when every corresponding body at
//! every step agrees in position and velocity within `epsilon` per component.
//! Mismatched step or body counts fail fast without partial comparison

use crate::simulation::states::Trajectory;

/// Compare two trajectories within a per-component tolerance
///
/// The check is symmetric in its arguments and short-circuits on the first
/// violating element; the first divergence is logged at debug level for
/// diagnostics. `epsilon` bounds |dx|, |dy|, |dvx| and |dvy| independently —
/// it tolerates floating accumulation drift between execution strategies,
/// it is not a precision guarantee
pub fn trajectories_compatible(a: &Trajectory, b: &Trajectory, epsilon: f64) -> bool {
    if a.len() != b.len() {
        log::debug!("step count mismatch: {} vs {}", a.len(), b.len());
        return false;
    }

    for (step, (sa, sb)) in a.steps.iter().zip(b.steps.iter()).enumerate() {
        if sa.len() != sb.len() {
            log::debug!(
                "body count mismatch at step {}: {} vs {}",
                step,
                sa.len(),
                sb.len()
            );
            return false;
        }

        for (ba, bb) in sa.iter().zip(sb.iter()) {
            let dx = (ba.x.x - bb.x.x).abs();
            let dy = (ba.x.y - bb.x.y).abs();
            let dvx = (ba.v.x - bb.v.x).abs();
            let dvy = (ba.v.y - bb.v.y).abs();

            if dx > epsilon || dy > epsilon || dvx > epsilon || dvy > epsilon {
                log::debug!(
                    "divergence at step {} body `{}`: dx={:e} dy={:e} dvx={:e} dvy={:e}",
                    step,
                    ba.name,
                    dx,
                    dy,
                    dvx,
                    dvy
                );
                return false;
            }
        }
    }

    true
}
