//! Per-run state and stop servicing shared by both controllers.

use log::debug;

use lift_core::{Floor, PassengerId, SimConfig, Tick};
use lift_model::{DemandIndex, LiftCar, Passenger};

use crate::error::SimResult;
use crate::observer::TickSnapshot;
use crate::report::{RunOutcome, RunReport};

/// How stop boarding selects riders.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Boarding {
    /// Take anyone waiting at the stop — the fixed-direction car passes
    /// every floor eventually, so heading does not matter for correctness.
    AnyDirection,
    /// Take only riders heading the car's way.
    MatchingDirection,
}

/// The world state of one run: the car, the population, and the demand
/// index, plus the tick counter.  Controllers own one of these and differ
/// only in how they sequence its operations.
pub(crate) struct RunState {
    pub(crate) config: SimConfig,
    pub(crate) top_floor: Floor,
    pub(crate) car: LiftCar,
    pub(crate) passengers: Vec<Passenger>,
    pub(crate) demand: DemandIndex,
    pub(crate) tick: Tick,
}

impl RunState {
    /// Validate `config` and set up a run over `passengers`.
    pub(crate) fn new(config: SimConfig, passengers: Vec<Passenger>) -> SimResult<RunState> {
        config.validate()?;
        let demand = DemandIndex::from_population(&passengers);
        Ok(RunState {
            top_floor: Floor(config.floor_count),
            car: LiftCar::new(),
            demand,
            passengers,
            tick: Tick::ZERO,
            config,
        })
    }

    /// `true` once every passenger has arrived.
    pub(crate) fn all_served(&self) -> bool {
        self.passengers.iter().all(|p| p.has_arrived())
    }

    /// `true` once the caller-supplied tick bound is exhausted.
    pub(crate) fn tick_bound_reached(&self) -> bool {
        self.config.max_ticks.is_some_and(|bound| self.tick.0 >= bound)
    }

    pub(crate) fn snapshot(&self) -> TickSnapshot<'_> {
        TickSnapshot {
            tick: self.tick,
            floor: self.car.current_floor,
            direction: self.car.direction,
            demand: &self.demand,
        }
    }

    /// Advance every passenger's wait/ride clock by one tick.
    pub(crate) fn tick_clocks(&mut self) {
        for passenger in &mut self.passengers {
            passenger.tick();
        }
    }

    /// Let off every onboard rider whose target is the current floor.
    ///
    /// Two-phase: collect the leavers, then apply the transitions, so the
    /// onboard list is never mutated while it is being scanned.
    pub(crate) fn disembark_here(&mut self) {
        let here = self.car.current_floor;
        let leaving: Vec<PassengerId> = self
            .car
            .onboard()
            .iter()
            .copied()
            .filter(|id| self.passengers[id.index()].target_floor == here)
            .collect();
        for id in leaving {
            self.car.disembark(id);
            let passenger = &mut self.passengers[id.index()];
            passenger.arrive();
            debug!("{id} arrived at {here} from {}", passenger.start_floor);
        }
    }

    /// Board waiting riders at the current floor, in population order,
    /// while capacity remains.  Each boarding is recorded in the demand
    /// index immediately.
    pub(crate) fn board_here(&mut self, rule: Boarding) {
        let here = self.car.current_floor;
        let direction = self.car.direction;
        let candidates: Vec<PassengerId> = self
            .passengers
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                p.is_waiting()
                    && p.start_floor == here
                    && (rule == Boarding::AnyDirection || p.direction == direction)
            })
            .map(|(i, _)| PassengerId(i as u32))
            .collect();
        for id in candidates {
            if !self.car.has_space() {
                break;
            }
            self.car.board(id);
            self.passengers[id.index()].board();
            self.demand.record_boarding(here);
            debug!("{id} boarded at {here}, heading {}", self.passengers[id.index()].direction);
        }
    }

    pub(crate) fn into_report(self, outcome: RunOutcome) -> RunReport {
        RunReport {
            floor_count: self.config.floor_count,
            population_size: self.passengers.len(),
            lifetime_steps: self.car.lifetime_steps,
            ticks: self.tick,
            outcome,
            passengers: self.passengers,
        }
    }
}
