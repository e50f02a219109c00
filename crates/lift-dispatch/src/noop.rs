//! A no-op dispatch policy — requests are never assigned.

use lift_car::ElevatorCar;
use lift_core::{RequestLedger, Tick};

use crate::{Assignment, DispatchPolicy, PendingQueue};

/// A [`DispatchPolicy`] that leaves every request pending.
///
/// Useful as a placeholder in tests that drive cars directly, or to model a
/// building whose dispatcher is offline.
pub struct NoopPolicy;

impl DispatchPolicy for NoopPolicy {
    fn assign(
        &self,
        _now: Tick,
        _cars: &mut [ElevatorCar],
        _pending: &mut PendingQueue,
        _ledger: &RequestLedger,
    ) -> Vec<Assignment> {
        vec![]
    }
}
