//! compare — run both dispatch strategies across a floor-count ladder and
//! report the comparison.
//!
//! The fixed-direction ("pulley") baseline traverses every floor and serves
//! as the yardstick; the look-ahead strategy should match or beat its
//! average wait on every rung.  Results are printed as a table and written
//! to `output/compare/run_stats.csv` for downstream plotting.
//!
//! Set `RUST_LOG=debug` to watch boarding and arrival events.

use std::path::Path;

use anyhow::Result;

use lift_output::{CsvWriter, OutputWriter, RunStatsRow};
use lift_stats::{Comparison, SweepConfig, sweep};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOOR_COUNTS: [u32; 5] = [5, 10, 20, 50, 100];
const POPULATION_SIZE: usize = 30;
const SEED: u64 = 42;
/// Caps pathological runs; generous next to the ladder's worst case.
const MAX_TICKS: u64 = 100_000;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== compare — liftsim dispatch strategies ===");
    println!("Population: {POPULATION_SIZE}  |  Seed: {SEED}  |  Floors: {FLOOR_COUNTS:?}");
    println!();

    // 1. Run the sweep: one naive/look-ahead pair per floor count, each
    //    pair sharing one generated population.
    let config = SweepConfig {
        floor_counts: FLOOR_COUNTS.to_vec(),
        population_size: POPULATION_SIZE,
        seed: SEED,
        max_ticks: Some(MAX_TICKS),
    };
    let results = sweep(&config)?;

    // 2. Print the comparison table.
    println!(
        "{:<8} {:<12} {:>8} {:>10} {:>10} {:>9} {:>9}",
        "Floors", "Strategy", "Steps", "TotalWait", "TotalRide", "AvgWait", "AvgRide",
    );
    println!("{}", "-".repeat(72));
    for comparison in &results {
        print_row("naive", comparison, &comparison.naive);
        print_row("look-ahead", comparison, &comparison.look_ahead);
    }

    // 3. Write run_stats.csv for the plotting side.
    std::fs::create_dir_all("output/compare")?;
    let mut writer = CsvWriter::new(Path::new("output/compare"))?;
    for comparison in &results {
        writer.write_run_stats(&RunStatsRow::new("naive", &comparison.naive))?;
        writer.write_run_stats(&RunStatsRow::new("look-ahead", &comparison.look_ahead))?;
    }
    writer.finish()?;

    println!();
    println!(
        "Wrote {} rows to output/compare/run_stats.csv",
        results.len() * 2,
    );

    Ok(())
}

fn print_row(strategy: &str, comparison: &Comparison, stats: &lift_stats::RunStats) {
    println!(
        "{:<8} {:<12} {:>8} {:>10} {:>10} {:>9} {:>9}",
        comparison.naive.floor_count,
        strategy,
        stats.lifetime_steps,
        stats.total_wait,
        stats.total_ride,
        stats.avg_wait,
        stats.avg_ride,
    );
}
