//! CSV export of recorded trajectories
//!
//! One row per (step index, body): `step,name,x,y,vx,vy`, step indices
//! 0-based, remaining fields in SI units at full f64 display precision

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::simulation::states::Trajectory;

/// Write a trajectory as CSV to any writer
pub fn write_trajectory<W: Write>(w: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(w, "step,name,x,y,vx,vy")?;
    for (step, bodies) in trajectory.steps.iter().enumerate() {
        for b in bodies {
            writeln!(
                w,
                "{},{},{},{},{},{}",
                step, b.name, b.x.x, b.x.y, b.v.x, b.v.y
            )?;
        }
    }
    Ok(())
}

/// Write a trajectory as CSV to `path`, creating parent directories
pub fn write_trajectory_csv<P: AsRef<Path>>(path: P, trajectory: &Trajectory) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut w = BufWriter::new(File::create(path)?);
    write_trajectory(&mut w, trajectory)?;
    w.flush()
}
