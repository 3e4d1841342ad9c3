//! The statistics aggregator.

use lift_sim::RunReport;

/// Aggregate statistics for one run.
///
/// The four wait/ride figures are floored at 1 — a display convention that
/// keeps reports comparable across configurations.  A genuinely zero total
/// therefore reports as 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    pub floor_count: u32,
    /// Total floors the car traveled.
    pub lifetime_steps: u64,
    /// Summed wait ticks over the arrived passengers, floored at 1.
    pub total_wait: u64,
    /// Summed ride ticks over the arrived passengers, floored at 1.
    pub total_ride: u64,
    /// Size of the population the run started with.
    pub population_size: usize,
    /// `total_wait` divided by the arrived headcount, floored at 1.
    pub avg_wait: u64,
    /// `total_ride` divided by the arrived headcount, floored at 1.
    pub avg_ride: u64,
}

impl RunStats {
    /// Reduce a terminal report into summary statistics.
    ///
    /// Only passengers that reached `Arrived` contribute.  A
    /// stall-terminated run's unresolved riders are excluded, their
    /// counters frozen wherever the run left them.
    pub fn from_report(report: &RunReport) -> RunStats {
        let mut total_wait = 0u64;
        let mut total_ride = 0u64;
        let mut arrived = 0u64;
        for passenger in report.arrived() {
            total_wait += passenger.wait_time;
            total_ride += passenger.ride_time;
            arrived += 1;
        }
        // Integer division over the arrived headcount.  Floored at one so a
        // stall that delivered nobody still yields a well-defined report.
        let divisor = arrived.max(1);

        RunStats {
            floor_count: report.floor_count,
            lifetime_steps: report.lifetime_steps,
            total_wait: floor_at_one(total_wait),
            total_ride: floor_at_one(total_ride),
            population_size: report.population_size,
            avg_wait: floor_at_one(total_wait / divisor),
            avg_ride: floor_at_one(total_ride / divisor),
        }
    }
}

/// The reporting floor: zeros display as ones.
fn floor_at_one(value: u64) -> u64 {
    value.max(1)
}
