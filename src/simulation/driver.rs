//! Simulation loop and strategy orchestration
//!
//! `simulate` runs the fixed-step loop for one strategy and collects the
//! trajectory; `run_scenario` runs whichever strategies the engine selects
//! and, when both ran, compares their trajectories

use thiserror::Error;

use crate::configuration::config::StrategyConfig;
use crate::simulation::compare::trajectories_compatible;
use crate::simulation::forces::{ForceStrategy, ParallelStrategy, SequentialStrategy};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, System, Trajectory};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// What a scenario run produced
///
/// `compatible` is the tri-state verdict consumed by the notification side:
/// `Some(true)` / `Some(false)` when both strategies ran and were compared,
/// `None` when only one strategy ran and no comparison was requested
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub sequential: Option<Trajectory>,
    pub parallel: Option<Trajectory>,
    pub compatible: Option<bool>,
}

/// Run the full simulation loop with one execution strategy
///
/// Starts from a copy of `system`, so the same initial state can drive
/// several strategies. Each of the `params.n_steps` steps is:
/// force pass over pre-step positions -> integrate -> append snapshot.
/// The driver blocks on the strategy until all per-body forces for the
/// current step are gathered; there is no overlap between one step's
/// integration and the next step's force pass
pub fn simulate(system: &System, params: &Parameters, strategy: &dyn ForceStrategy) -> Trajectory {
    let mut sys = system.clone();
    let n = sys.bodies.len();

    let mut trajectory = Trajectory::new();
    let mut forces = vec![NVec2::zeros(); n];

    for _ in 0..params.n_steps {
        // Full force pass before any body moves
        strategy.forces(&sys, &mut forces);
        semi_implicit_euler(&mut sys, &forces, params.dt);

        // The trajectory owns its snapshots; history is never mutated
        trajectory.push(sys.bodies.clone());
    }

    trajectory
}

/// Run the strategies selected by the scenario's engine settings
pub fn run_scenario(scenario: &Scenario) -> Result<ScenarioOutcome, DriverError> {
    let params = &scenario.parameters;
    let system = &scenario.system;

    let run_sequential = || {
        log::info!(
            "starting sequential simulation: {} bodies, {} steps, dt = {} s",
            system.bodies.len(),
            params.n_steps,
            params.dt
        );
        simulate(system, params, &SequentialStrategy { G: params.G })
    };

    let run_parallel = |strategy: &ParallelStrategy| {
        log::info!(
            "starting parallel simulation: {} bodies, {} steps, {} workers",
            system.bodies.len(),
            params.n_steps,
            strategy.workers()
        );
        simulate(system, params, strategy)
    };

    let outcome = match scenario.engine.strategy {
        StrategyConfig::Sequential => ScenarioOutcome {
            sequential: Some(run_sequential()),
            parallel: None,
            compatible: None,
        },
        StrategyConfig::Parallel => {
            let strategy = ParallelStrategy::new(params.G, scenario.engine.workers)?;
            ScenarioOutcome {
                sequential: None,
                parallel: Some(run_parallel(&strategy)),
                compatible: None,
            }
        }
        StrategyConfig::Both => {
            let seq = run_sequential();
            let strategy = ParallelStrategy::new(params.G, scenario.engine.workers)?;
            let par = run_parallel(&strategy);

            log::info!("comparing trajectories at epsilon = {:e}", params.epsilon);
            let compatible = trajectories_compatible(&seq, &par, params.epsilon);

            ScenarioOutcome {
                sequential: Some(seq),
                parallel: Some(par),
                compatible: Some(compatible),
            }
        }
    };

    Ok(outcome)
}
