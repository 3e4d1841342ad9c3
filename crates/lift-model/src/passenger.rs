//! The passenger state machine.

use lift_core::{Direction, Floor};

/// Lifecycle of one rider.  Transitions are strictly forward:
/// `Waiting → InLift → Arrived`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassengerState {
    /// Standing on `start_floor`, accruing wait time.
    Waiting,
    /// Onboard the car, accruing ride time.
    InLift,
    /// Delivered to `target_floor`.  Terminal; counters are frozen.
    Arrived,
}

/// One rider.
///
/// Invariants: `target_floor != start_floor`, and `target_floor` lies
/// strictly on the side of `start_floor` implied by `direction`.
/// [`Passenger::new`] checks both in debug builds, and generation can only
/// produce conforming passengers.  Floors are NOT checked against any
/// particular building here — a passenger recorded beyond the top floor is
/// unreachable demand, which the look-ahead controller's stall guard exists
/// to survive.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub start_floor: Floor,
    pub direction: Direction,
    pub target_floor: Floor,
    /// Ticks spent `Waiting`.
    pub wait_time: u64,
    /// Ticks spent `InLift`.
    pub ride_time: u64,
    state: PassengerState,
}

impl Passenger {
    pub fn new(start_floor: Floor, direction: Direction, target_floor: Floor) -> Passenger {
        debug_assert!(
            target_floor.is_beyond(start_floor, direction),
            "target {target_floor} does not lie {direction} from start {start_floor}",
        );
        Passenger {
            start_floor,
            direction,
            target_floor,
            wait_time: 0,
            ride_time: 0,
            state: PassengerState::Waiting,
        }
    }

    #[inline]
    pub fn state(&self) -> PassengerState {
        self.state
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.state == PassengerState::Waiting
    }

    #[inline]
    pub fn is_onboard(&self) -> bool {
        self.state == PassengerState::InLift
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.state == PassengerState::Arrived
    }

    /// `Waiting → InLift`.
    pub fn board(&mut self) {
        debug_assert_eq!(self.state, PassengerState::Waiting, "only a waiting passenger can board");
        self.state = PassengerState::InLift;
    }

    /// `InLift → Arrived`.  Counters freeze from here on.
    pub fn arrive(&mut self) {
        debug_assert_eq!(self.state, PassengerState::InLift, "only an onboard passenger can arrive");
        self.state = PassengerState::Arrived;
    }

    /// Advance this passenger's clock by one tick: waiting passengers accrue
    /// wait time, onboard passengers accrue ride time, arrived passengers
    /// stay frozen.
    pub fn tick(&mut self) {
        match self.state {
            PassengerState::Waiting => self.wait_time += 1,
            PassengerState::InLift => self.ride_time += 1,
            PassengerState::Arrived => {}
        }
    }
}
