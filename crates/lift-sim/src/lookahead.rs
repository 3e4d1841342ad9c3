//! The directional look-ahead (LOOK-style) controller.
//!
//! Boards only riders heading the car's way, and keeps moving only while
//! the demand index or an onboard target lies strictly ahead; otherwise it
//! turns around on the spot.  Restricting boarding and skipping dead floors
//! cuts average wait against the pulley baseline, at the cost of keeping
//! the demand index live and running two directional scans per tick.
//!
//! A stall guard caps consecutive non-productive reversals, so demand the
//! car can never serve (for instance a rider recorded beyond the top floor)
//! ends the run instead of oscillating it forever.  The run then reports
//! partial-but-valid statistics over whoever arrived.

use log::warn;

use lift_core::{SimConfig, SimRng};
use lift_model::{DemandIndex, LiftCar, Passenger, generate_population};

use crate::controller::Controller;
use crate::error::SimResult;
use crate::observer::{NoopObserver, SimObserver, TickSnapshot};
use crate::report::{RunOutcome, RunReport};
use crate::run::{Boarding, RunState};

/// Consecutive non-productive reversals tolerated before the stall guard
/// ends the run.  An ad hoc safety valve, not a physical parameter; the
/// threshold is part of the controller's observable contract.
pub const STALL_REVERSAL_LIMIT: u32 = 5;

/// The directional look-ahead strategy.
pub struct LookAheadController {
    state: RunState,
    /// Consecutive reversals without an intervening move.
    stall_count: u32,
}

impl LookAheadController {
    /// Validate `config` and set up a run over `passengers`.
    pub fn new(config: SimConfig, passengers: Vec<Passenger>) -> SimResult<LookAheadController> {
        Ok(LookAheadController {
            state: RunState::new(config, passengers)?,
            stall_count: 0,
        })
    }

    /// Set up a run over a freshly generated population of `size` riders,
    /// seeded from `config.seed`.
    pub fn with_generated_population(
        config: SimConfig,
        size: usize,
    ) -> SimResult<LookAheadController> {
        let mut rng = SimRng::new(config.seed);
        let passengers = generate_population(config.floor_count, size, &mut rng)?;
        LookAheadController::new(config, passengers)
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

    pub fn stall_count(&self) -> u32 {
        self.stall_count
    }

    pub fn snapshot(&self) -> TickSnapshot<'_> {
        self.state.snapshot()
    }

    // ── Tick processing ───────────────────────────────────────────────────

    /// Process one tick.  Returns `Some` once the run is over; the terminal
    /// tick is processed before its outcome is returned.
    ///
    /// Phase order: board direction-matching riders, disembark, then either
    /// finish (nobody left), or advance the wait/ride clocks and move one
    /// floor if anything lies ahead — reversing in place if not.  More than
    /// [`STALL_REVERSAL_LIMIT`] consecutive reversals end the run.
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

        self.state.board_here(Boarding::MatchingDirection);
        self.state.disembark_here();

        let outcome = if self.state.all_served() {
            Some(RunOutcome::Completed)
        } else {
            self.state.tick_clocks();
            if self.should_advance() {
                self.state.car.advance();
                self.stall_count = 0;
            } else {
                self.state.car.reverse();
                self.stall_count += 1;
            }
            if self.stall_count > STALL_REVERSAL_LIMIT {
                warn!(
                    "stall guard tripped after {} consecutive reversals at {}; \
                     ending run with unserved demand",
                    self.stall_count, self.state.car.current_floor,
                );
                Some(RunOutcome::Stalled)
            } else {
                None
            }
        };

        observer.on_tick(&self.state.snapshot());
        self.state.tick = self.state.tick.next();
        outcome
    }

    /// `true` if anything worth moving toward lies strictly ahead.
    ///
    /// Two scans: the demand index for waiting riders beyond the current
    /// floor, and the onboard list for targets beyond it.  A car sitting on
    /// its directional extreme never advances, whatever the index claims —
    /// that is what contains out-of-building demand.
    fn should_advance(&self) -> bool {
        let car = &self.state.car;
        if car.at_directional_extreme(self.state.top_floor) {
            return false;
        }
        self.state.demand.has_demand_beyond(car.current_floor, car.direction)
            || self.egress_ahead()
    }

    /// `true` if an onboard rider's target lies strictly ahead.
    fn egress_ahead(&self) -> bool {
        let car = &self.state.car;
        car.onboard().iter().any(|id| {
            self.state.passengers[id.index()]
                .target_floor
                .is_beyond(car.current_floor, car.direction)
        })
    }
}

impl Controller for LookAheadController {
    fn label(&self) -> &'static str {
        "look-ahead"
    }

    fn run_with(self, observer: &mut dyn SimObserver) -> RunReport {
        self.run(observer)
    }
}
