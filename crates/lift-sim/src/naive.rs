//! The fixed-direction ("pulley") controller.
//!
//! Models a lift that cannot reverse mid-shaft: it runs floor by floor and
//! turns around only at the top and bottom of the building, whether or not
//! anyone needs it there.  Boarding ignores the rider's desired direction —
//! the car passes every floor eventually, so direction-matching is not
//! needed for correctness, and this baseline deliberately leaves that
//! efficiency on the table.
//!
//! Exhaustive traversal guarantees termination for any in-building
//! population.  There is no upper bound on the floor count here; callers
//! simulating very tall buildings should set [`SimConfig::max_ticks`].

use lift_core::{SimConfig, SimRng};
use lift_model::{DemandIndex, LiftCar, Passenger, generate_population};

use crate::controller::Controller;
use crate::error::SimResult;
use crate::observer::{NoopObserver, SimObserver, TickSnapshot};
use crate::report::{RunOutcome, RunReport};
use crate::run::{Boarding, RunState};

/// The fixed-direction baseline strategy.
pub struct NaiveController {
    state: RunState,
    started: bool,
}

impl NaiveController {
    /// Validate `config` and set up a run over `passengers`.
    pub fn new(config: SimConfig, passengers: Vec<Passenger>) -> SimResult<NaiveController> {
        Ok(NaiveController {
            state: RunState::new(config, passengers)?,
            started: false,
        })
    }

    /// Set up a run over a freshly generated population of `size` riders,
    /// seeded from `config.seed`.
    pub fn with_generated_population(
        config: SimConfig,
        size: usize,
    ) -> SimResult<NaiveController> {
        let mut rng = SimRng::new(config.seed);
        let passengers = generate_population(config.floor_count, size, &mut rng)?;
        NaiveController::new(config, passengers)
    }

    // ── Read accessors ────────────────────────────────────────────────────

    pub fn car(&self) -> &LiftCar {
        &self.state.car
    }

    pub fn demand(&self) -> &DemandIndex {
        &self.state.demand
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.state.passengers
    }

    pub fn snapshot(&self) -> TickSnapshot<'_> {
        self.state.snapshot()
    }

    // ── Tick processing ───────────────────────────────────────────────────

    /// Process one tick.  Returns `Some` once the run is over; the terminal
    /// tick is processed before its outcome is returned.
    ///
    /// Tick 0 is a stop-service pass at the starting floor: riders there
    /// board before the car first moves and before any counter advances.
    /// Every later tick, in order: move one floor (turning around on the
    /// extremes — the landing itself still counts as a step), advance the
    /// wait/ride clocks, disembark, board.
    pub fn step(&mut self) -> Option<RunOutcome> {
        self.step_with(&mut NoopObserver)
    }

    /// Process up to `n` ticks, reporting each to `observer`.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks(&mut self, n: u64, observer: &mut dyn SimObserver) -> Option<RunOutcome> {
        for _ in 0..n {
            if let Some(outcome) = self.step_with(observer) {
                return Some(outcome);
            }
        }
        None
    }

    /// Drive the run to termination.
    pub fn run(mut self, observer: &mut dyn SimObserver) -> RunReport {
        let outcome = loop {
            if let Some(outcome) = self.step_with(observer) {
                break outcome;
            }
        };
        observer.on_run_end(self.state.tick, outcome);
        self.state.into_report(outcome)
    }

    fn step_with(&mut self, observer: &mut dyn SimObserver) -> Option<RunOutcome> {
        if self.state.all_served() {
            return Some(RunOutcome::Completed);
        }
        if self.state.tick_bound_reached() {
            return Some(RunOutcome::TickLimit);
        }

        if !self.started {
            // Tick 0: service the starting floor before the first move.
            self.started = true;
            self.state.disembark_here();
            self.state.board_here(Boarding::AnyDirection);
        } else {
            self.state.car.advance();
            if self.state.car.at_directional_extreme(self.state.top_floor) {
                self.state.car.reverse();
            }
            self.state.tick_clocks();
            self.state.disembark_here();
            self.state.board_here(Boarding::AnyDirection);
        }

        observer.on_tick(&self.state.snapshot());
        let done = self.state.all_served();
        self.state.tick = self.state.tick.next();
        done.then_some(RunOutcome::Completed)
    }
}

impl Controller for NaiveController {
    fn label(&self) -> &'static str {
        "naive"
    }

    fn run_with(self, observer: &mut dyn SimObserver) -> RunReport {
        self.run(observer)
    }
}
