//! Seeded random population generation.

use lift_core::{CoreError, CoreResult, Direction, Floor, SimRng};

use crate::passenger::Passenger;

/// Size range for [`generate_population_sized`].
const RANDOM_POPULATION: std::ops::RangeInclusive<usize> = 10..=30;

/// Generate `size` passengers on uniformly random floors of a
/// `floor_count`-floor building.
///
/// Direction is forced at the extremes (nobody on the top floor goes up,
/// nobody on the ground floor goes down), otherwise a fair coin; the target
/// is uniform over the floors strictly beyond the start in the chosen
/// direction.
pub fn generate_population(
    floor_count: u32,
    size: usize,
    rng: &mut SimRng,
) -> CoreResult<Vec<Passenger>> {
    if floor_count < 2 {
        return Err(CoreError::InvalidFloorCount(floor_count));
    }
    Ok((0..size).map(|_| generate_passenger(floor_count, rng)).collect())
}

/// Generate a population whose size is itself drawn uniformly from 10..=30.
pub fn generate_population_sized(floor_count: u32, rng: &mut SimRng) -> CoreResult<Vec<Passenger>> {
    if floor_count < 2 {
        return Err(CoreError::InvalidFloorCount(floor_count));
    }
    let size = rng.gen_range(RANDOM_POPULATION);
    generate_population(floor_count, size, rng)
}

fn generate_passenger(floor_count: u32, rng: &mut SimRng) -> Passenger {
    let start = rng.gen_range(1..=floor_count);
    let direction = if start == floor_count {
        Direction::Down
    } else if start == 1 {
        Direction::Up
    } else if rng.gen_bool(0.5) {
        Direction::Up
    } else {
        Direction::Down
    };
    let target = match direction {
        Direction::Up => rng.gen_range(start + 1..=floor_count),
        Direction::Down => rng.gen_range(1..start),
    };
    Passenger::new(Floor(start), direction, Floor(target))
}
