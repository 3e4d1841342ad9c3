//! The demand index: floor → waiting headcount.

use lift_core::{Direction, Floor};

use crate::passenger::Passenger;

#[cfg(feature = "fx-hash")]
type FloorMap = rustc_hash::FxHashMap<Floor, u32>;
#[cfg(not(feature = "fx-hash"))]
type FloorMap = std::collections::HashMap<Floor, u32>;

/// Count of `Waiting` passengers per floor.
///
/// Built once from the initial population and decremented on every boarding.
/// Entries that reach zero are removed, so the key set is exactly the set of
/// floors with live demand — the directional scan relies on this.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemandIndex {
    counts: FloorMap,
}

impl DemandIndex {
    /// Build from the waiting members of `population`.
    pub fn from_population(population: &[Passenger]) -> DemandIndex {
        let mut counts = FloorMap::default();
        for passenger in population.iter().filter(|p| p.is_waiting()) {
            *counts.entry(passenger.start_floor).or_insert(0) += 1;
        }
        DemandIndex { counts }
    }

    /// Record one boarding on `floor`, pruning the entry when it hits zero.
    pub fn record_boarding(&mut self, floor: Floor) {
        match self.counts.get_mut(&floor) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.counts.remove(&floor);
            }
            None => debug_assert!(false, "boarding on {floor} with no recorded demand"),
        }
    }

    /// Waiting headcount on `floor`.
    pub fn waiting_on(&self, floor: Floor) -> u32 {
        self.counts.get(&floor).copied().unwrap_or(0)
    }

    /// Waiting headcount across all floors.
    pub fn total_waiting(&self) -> u32 {
        self.counts.values().sum()
    }

    /// `true` if some floor strictly beyond `from` in `direction` has demand.
    pub fn has_demand_beyond(&self, from: Floor, direction: Direction) -> bool {
        self.counts.keys().any(|&floor| floor.is_beyond(from, direction))
    }

    /// `true` if no floor has demand.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of floors with live demand.
    pub fn floor_count(&self) -> usize {
        self.counts.len()
    }

    /// Iterate over `(floor, headcount)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Floor, u32)> + '_ {
        self.counts.iter().map(|(&floor, &count)| (floor, count))
    }
}
