//! Per-run simulation configuration.

use crate::error::{CoreError, CoreResult};

/// Configuration for a single simulation run.
///
/// Constructed by the embedding caller and handed to a controller; the
/// controller validates it before touching any state.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of floors in the building.  Must be at least 2: a one-floor
    /// building admits no valid journey.
    pub floor_count: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Optional hard tick bound.  `None` runs until the controller's own
    /// termination policy fires.  Embedders driving the fixed-direction
    /// strategy over very tall buildings should set a bound: its full
    /// traversal cost grows linearly with the floor count.
    pub max_ticks: Option<u64>,
}

impl SimConfig {
    /// A validated configuration with no tick bound.
    pub fn new(floor_count: u32, seed: u64) -> CoreResult<Self> {
        let config = Self { floor_count, seed, max_ticks: None };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floor_count < 2 {
            return Err(CoreError::InvalidFloorCount(self.floor_count));
        }
        Ok(())
    }
}
