//! Side-by-side strategy comparison and floor-count sweeps.

use log::{debug, info};

use lift_core::{SimConfig, SimRng};
use lift_model::{Passenger, generate_population};
use lift_sim::{
    Controller, LookAheadController, NaiveController, NoopObserver, RunOutcome, SimResult,
};

use crate::stats::RunStats;

/// Both strategies' results over the same initial population.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub naive: RunStats,
    pub naive_outcome: RunOutcome,
    pub look_ahead: RunStats,
    pub look_ahead_outcome: RunOutcome,
}

/// Run both strategies over `population` and aggregate each side.
///
/// Each controller receives its own deep copy of the population, so nothing
/// mutable is ever shared between the two runs — or between concurrent
/// callers of this function.
pub fn compare_strategies(config: &SimConfig, population: &[Passenger]) -> SimResult<Comparison> {
    let naive_report =
        NaiveController::new(config.clone(), population.to_vec())?.run_with(&mut NoopObserver);
    let look_report =
        LookAheadController::new(config.clone(), population.to_vec())?.run_with(&mut NoopObserver);
    debug!(
        "compared {} passengers over {} floors: naive {:?} in {} steps, look-ahead {:?} in {} steps",
        population.len(),
        config.floor_count,
        naive_report.outcome,
        naive_report.lifetime_steps,
        look_report.outcome,
        look_report.lifetime_steps,
    );
    Ok(Comparison {
        naive: RunStats::from_report(&naive_report),
        naive_outcome: naive_report.outcome,
        look_ahead: RunStats::from_report(&look_report),
        look_ahead_outcome: look_report.outcome,
    })
}

/// Configuration for a floor-count sweep.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Floor counts to compare, one comparison per entry.
    pub floor_counts: Vec<u32>,
    /// Population size per entry.
    pub population_size: usize,
    /// Root seed; every entry derives its own child seed from it.
    pub seed: u64,
    /// Optional per-run tick bound forwarded to both controllers.
    pub max_ticks: Option<u64>,
}

/// Run one comparison per configured floor count.
///
/// Entry populations are generated from child seeds derived up front, so
/// the result is identical whether entries run sequentially or (with the
/// `parallel` feature) on Rayon's thread pool.
pub fn sweep(sweep_config: &SweepConfig) -> SimResult<Vec<Comparison>> {
    let mut root = SimRng::new(sweep_config.seed);
    let entries: Vec<(u32, SimRng)> = sweep_config
        .floor_counts
        .iter()
        .enumerate()
        .map(|(offset, &floor_count)| (floor_count, root.child(offset as u64)))
        .collect();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        entries
            .into_par_iter()
            .map(|(floor_count, rng)| run_entry(sweep_config, floor_count, rng))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        entries
            .into_iter()
            .map(|(floor_count, rng)| run_entry(sweep_config, floor_count, rng))
            .collect()
    }
}

fn run_entry(
    sweep_config: &SweepConfig,
    floor_count: u32,
    mut rng: SimRng,
) -> SimResult<Comparison> {
    let population = generate_population(floor_count, sweep_config.population_size, &mut rng)?;
    let mut config = SimConfig::new(floor_count, sweep_config.seed)?;
    config.max_ticks = sweep_config.max_ticks;
    let comparison = compare_strategies(&config, &population)?;
    info!(
        "{floor_count} floors: avg wait {} (naive) vs {} (look-ahead)",
        comparison.naive.avg_wait, comparison.look_ahead.avg_wait,
    );
    Ok(comparison)
}
