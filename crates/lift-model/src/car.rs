//! The lift car: position, direction, capacity, and the onboard set.

use lift_core::{Direction, Floor, PassengerId};

/// Maximum number of riders the car holds at once.
pub const CAR_CAPACITY: u8 = 6;

/// The single car shared by both dispatch strategies.
///
/// Strategy-specific bookkeeping (the look-ahead stall counter) lives in the
/// controller that needs it, not here.
#[derive(Clone, Debug)]
pub struct LiftCar {
    /// Where the car is.  Stays within `1..=floor_count` because the
    /// controllers reverse at the extremes before moving.
    pub current_floor: Floor,
    /// Which way the car is moving, or will move next.
    pub direction: Direction,
    capacity_remaining: u8,
    onboard: Vec<PassengerId>,
    /// Total floors traveled over the car's lifetime.
    pub lifetime_steps: u64,
}

impl LiftCar {
    /// A fresh car: ground floor, heading up, empty.
    pub fn new() -> LiftCar {
        LiftCar {
            current_floor: Floor::GROUND,
            direction: Direction::Up,
            capacity_remaining: CAR_CAPACITY,
            onboard: Vec::with_capacity(CAR_CAPACITY as usize),
            lifetime_steps: 0,
        }
    }

    /// Units of capacity still free.
    #[inline]
    pub fn capacity_remaining(&self) -> u8 {
        self.capacity_remaining
    }

    /// `true` if at least one more rider fits.
    #[inline]
    pub fn has_space(&self) -> bool {
        self.capacity_remaining > 0
    }

    /// `true` if nobody is onboard.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.onboard.is_empty()
    }

    /// The onboard riders, in boarding order.
    #[inline]
    pub fn onboard(&self) -> &[PassengerId] {
        &self.onboard
    }

    /// Take one rider on, consuming one unit of capacity.
    pub fn board(&mut self, id: PassengerId) {
        debug_assert!(self.has_space(), "boarding {id} past capacity");
        self.onboard.push(id);
        self.capacity_remaining -= 1;
    }

    /// Let one rider off, freeing one unit of capacity.
    pub fn disembark(&mut self, id: PassengerId) {
        let pos = self.onboard.iter().position(|&p| p == id);
        debug_assert!(pos.is_some(), "disembarking {id} who is not onboard");
        if let Some(pos) = pos {
            // Shift rather than swap: boarding order stays meaningful.
            self.onboard.remove(pos);
            self.capacity_remaining += 1;
        }
    }

    /// Move one floor in the current direction and count the step.
    pub fn advance(&mut self) {
        self.current_floor = self.current_floor.step(self.direction);
        self.lifetime_steps += 1;
    }

    /// Flip direction in place.
    pub fn reverse(&mut self) {
        self.direction = self.direction.opposite();
    }

    /// `true` if the car sits on the last floor reachable in its current
    /// direction.
    pub fn at_directional_extreme(&self, top_floor: Floor) -> bool {
        match self.direction {
            Direction::Up => self.current_floor == top_floor,
            Direction::Down => self.current_floor == Floor::GROUND,
        }
    }
}

impl Default for LiftCar {
    fn default() -> Self {
        Self::new()
    }
}
