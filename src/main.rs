use gravsim::{run_scenario, Scenario, ScenarioConfig};
use gravsim::{bench_forces, bench_steps};
use gravsim::write_trajectory_csv;

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Run the strategy timing sweeps instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_steps();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    let outputs = scenario.outputs.clone();
    let outcome = run_scenario(&scenario)?;

    if let Some(seq) = &outcome.sequential {
        write_trajectory_csv(&outputs.seq_csv, seq)?;
        log::info!("wrote sequential trajectory to {}", outputs.seq_csv);
    }
    if let Some(par) = &outcome.parallel {
        write_trajectory_csv(&outputs.par_csv, par)?;
        log::info!("wrote parallel trajectory to {}", outputs.par_csv);
    }

    match outcome.compatible {
        Some(true) => log::info!("simulations are compatible"),
        Some(false) => log::warn!("simulations are NOT compatible"),
        None => log::info!("no comparison requested"),
    }

    Ok(())
}
