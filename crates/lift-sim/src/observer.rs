//! Run observer for progress reporting and external animation.

use lift_core::{Direction, Floor, Tick};
use lift_model::DemandIndex;

use crate::report::RunOutcome;

/// Read-only view of one processed tick.
///
/// This is everything an external renderer may sample: where the car is,
/// which way it is heading, and the live waiting headcount per floor.
#[derive(Clone, Copy, Debug)]
pub struct TickSnapshot<'a> {
    pub tick: Tick,
    pub floor: Floor,
    pub direction: Direction,
    pub demand: &'a DemandIndex,
}

/// Callbacks invoked by a controller at every tick boundary.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick(&mut self, snapshot: &TickSnapshot<'_>) {
///         println!("{}: car at {} moving {}", snapshot.tick, snapshot.floor, snapshot.direction);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every processed tick, including the terminal one.
    fn on_tick(&mut self, _snapshot: &TickSnapshot<'_>) {}

    /// Called once when the run ends.
    fn on_run_end(&mut self, _final_tick: Tick, _outcome: RunOutcome) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
