//! Run outcomes and the terminal report.

use lift_core::Tick;
use lift_model::Passenger;

/// Why a run ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunOutcome {
    /// Every passenger reached `Arrived`.
    Completed,
    /// The look-ahead stall guard tripped: too many consecutive
    /// non-productive reversals.  Not an error — statistics cover whoever
    /// arrived, and unresolved passengers keep their last counter values.
    Stalled,
    /// The configured `max_ticks` bound was hit first.
    TickLimit,
}

/// Terminal state of one run, consumed by the statistics aggregator.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub floor_count: u32,
    /// Size of the population the run started with.
    pub population_size: usize,
    /// Total floors the car traveled.
    pub lifetime_steps: u64,
    /// Ticks processed, including reversal ticks where the car stood still.
    pub ticks: Tick,
    pub outcome: RunOutcome,
    /// The terminal population, in the order it was supplied.
    pub passengers: Vec<Passenger>,
}

impl RunReport {
    /// The passengers that reached `Arrived`.
    pub fn arrived(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter().filter(|p| p.has_arrived())
    }

    /// `true` if any passenger is still waiting or onboard.
    pub fn has_unresolved(&self) -> bool {
        self.passengers.iter().any(|p| !p.has_arrived())
    }
}
