//! Building configuration consumed (not owned) by the simulation core.

use crate::{CoreError, CoreResult};

/// Static building parameters, supplied once at construction and immutable
/// thereafter.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    /// Number of floors.  Valid floors are `0..floor_count`.
    pub floor_count: u32,

    /// Number of elevator cars in the fleet, fixed for the run's duration.
    pub car_count: usize,

    /// Maximum passengers one car may hold at any time.
    pub car_capacity: usize,
}

impl BuildingConfig {
    /// Check that the building can host a meaningful simulation.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floor_count < 2 {
            return Err(CoreError::Config(format!(
                "building needs at least 2 floors, got {}",
                self.floor_count
            )));
        }
        if self.car_count == 0 {
            return Err(CoreError::Config("fleet must have at least one car".into()));
        }
        if self.car_capacity == 0 {
            return Err(CoreError::Config("car capacity must be at least 1".into()));
        }
        Ok(())
    }

    /// Is `floor` a valid floor of this building?
    #[inline]
    pub fn contains_floor(&self, floor: u32) -> bool {
        floor < self.floor_count
    }
}
