use std::time::Instant;

use crate::simulation::driver::simulate;
use crate::simulation::forces::{ForceStrategy, ParallelStrategy, SequentialStrategy};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a manual System of size `n`
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0);

        bodies.push(Body {
            name: format!("b{i}"),
            m: 1.0,
            x,
            v: NVec2::zeros(),
        });
    }

    System { bodies, t: 0.0 }
}

fn make_params() -> Parameters {
    Parameters {
        n_steps: 10,
        dt: 0.001,
        G: 0.1,
        epsilon: 1.0e5,
    }
}

/// Time one full force pass, sequential vs parallel, for a range of n
pub fn bench_forces() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    let params = make_params();
    let seq = SequentialStrategy { G: params.G };
    let par = ParallelStrategy::new(params.G, 0).expect("failed to build worker pool");

    for n in ns {
        let sys = make_system(n);
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        seq.forces(&sys, &mut out);
        par.forces(&sys, &mut out);

        // Time sequential
        let t0 = Instant::now();
        seq.forces(&sys, &mut out);
        let dt_seq = t0.elapsed().as_secs_f64();

        // Time parallel
        let t1 = Instant::now();
        par.forces(&sys, &mut out);
        let dt_par = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, sequential = {:8.6} s, parallel = {:8.6} s ({} workers)",
            dt_seq,
            dt_par,
            par.workers()
        );
    }
}

/// Time whole simulation runs for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_steps() {
    println!("N,sequential_ms,parallel_ms");

    let params = make_params();
    let seq = SequentialStrategy { G: params.G };
    let par = ParallelStrategy::new(params.G, 0).expect("failed to build worker pool");

    for n in (200..=3200).step_by(200) {
        let sys = make_system(n);

        let t0 = Instant::now();
        let _ = simulate(&sys, &params, &seq);
        let ms_seq = t0.elapsed().as_secs_f64() * 1000.0 / params.n_steps as f64;

        let t1 = Instant::now();
        let _ = simulate(&sys, &params, &par);
        let ms_par = t1.elapsed().as_secs_f64() * 1000.0 / params.n_steps as f64;

        println!("{},{:.6},{:.6}", n, ms_seq, ms_par);
    }
}
