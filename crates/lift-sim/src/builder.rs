//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeMap;

use lift_car::ElevatorCar;
use lift_core::{BuildingConfig, CarId, RequestLedger, SimClock, SimConfig};
use lift_dispatch::{DispatchPolicy, PendingQueue};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`BuildingConfig`] — floors, fleet size, per-car capacity
/// - [`SimConfig`] — total ticks, seed, output interval
/// - `P: DispatchPolicy` — the scheduling policy (e.g.
///   [`lift_dispatch::ScanPolicy`])
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                      |
/// |----------------------|------------------------------|
/// | `.initial_floors(v)` | All cars start at floor 0    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(building, config, ScanPolicy)
///     .initial_floors(vec![0, 4])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: DispatchPolicy> {
    building: BuildingConfig,
    config: SimConfig,
    policy: P,
    initial_floors: Option<Vec<u32>>,
}

impl<P: DispatchPolicy> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(building: BuildingConfig, config: SimConfig, policy: P) -> Self {
        Self {
            building,
            config,
            policy,
            initial_floors: None,
        }
    }

    /// Supply each car's starting floor (must be length `car_count`).
    ///
    /// If not called, every car starts at floor 0.
    pub fn initial_floors(mut self, floors: Vec<u32>) -> Self {
        self.initial_floors = Some(floors);
        self
    }

    /// Validate inputs, build the fleet, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.building.validate()?;

        let floors = match self.initial_floors {
            Some(floors) => {
                if floors.len() != self.building.car_count {
                    return Err(SimError::CarCountMismatch {
                        expected: self.building.car_count,
                        got: floors.len(),
                        what: "initial floors",
                    });
                }
                if let Some(&bad) = floors.iter().find(|&&f| !self.building.contains_floor(f)) {
                    return Err(SimError::Config(format!(
                        "initial floor {bad} outside building (valid floors 0..{})",
                        self.building.floor_count
                    )));
                }
                floors
            }
            None => vec![0; self.building.car_count],
        };

        let cars = floors
            .iter()
            .enumerate()
            .map(|(i, &floor)| ElevatorCar::new(CarId(i as u16), floor, self.building.car_capacity))
            .collect();

        Ok(Sim {
            building: self.building,
            config: self.config,
            clock: SimClock::new(),
            cars,
            ledger: RequestLedger::new(),
            pending: PendingQueue::new(),
            policy: self.policy,
            arrivals: BTreeMap::new(),
            waiting: Default::default(),
            withdrawn: Default::default(),
        })
    }
}
