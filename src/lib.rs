pub mod simulation;
pub mod configuration;
pub mod recording;
pub mod benchmark;

pub use simulation::states::{Body, System, Trajectory, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{net_force, ForceStrategy, SequentialStrategy, ParallelStrategy};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::scenario::Scenario;
pub use simulation::driver::{simulate, run_scenario, DriverError, ScenarioOutcome};
pub use simulation::compare::trajectories_compatible;

pub use configuration::config::{
    StrategyConfig, EngineConfig, ParametersConfig, BodyConfig, OutputsConfig, ScenarioConfig,
    ScenarioError,
};

pub use recording::recorder::{write_trajectory, write_trajectory_csv};

pub use benchmark::benchmark::{bench_forces, bench_steps};
