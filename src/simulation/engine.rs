//! High-level runtime engine settings
//!
//! Selects which execution strategy (or both, for the equivalence check)
//! runs a scenario, and how many workers the parallel pool gets

use crate::configuration::config::StrategyConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub strategy: StrategyConfig, // sequential, parallel, or both
    pub workers: usize, // parallel pool size, 0 = available parallelism
}
