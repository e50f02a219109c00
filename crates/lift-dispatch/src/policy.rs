//! The `DispatchPolicy` trait — the main extension point for user code.

use lift_car::ElevatorCar;
use lift_core::{CarId, RequestId, RequestLedger, Tick};

use crate::PendingQueue;

/// One request-to-car pairing produced by a dispatch pass.
///
/// The controller records the car as the request's carrier so that, when the
/// car later opens its doors at the origin floor, it knows which waiting
/// passengers belong to it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Assignment {
    pub request: RequestId,
    pub car: CarId,
}

/// Pluggable request-to-car assignment.
///
/// Implement this trait to define how pending requests are matched to cars
/// each tick.  The policy receives mutable access to the fleet and the
/// pending queue only for the duration of one call and must not retain state
/// across ticks beyond what it stores into the cars' stop queues.
///
/// A correct implementation removes every request it assigns from `pending`,
/// schedules the origin (and, where the sweep allows, the destination) on
/// the chosen car via [`ElevatorCar::enqueue_stop`], and reports the pairing
/// in its return value.  Leaving a request pending is always legal —
/// unassignable requests are backpressure, not failure.
pub trait DispatchPolicy: Send + Sync + 'static {
    /// Run one dispatch pass over the fleet.
    fn assign(
        &self,
        now: Tick,
        cars: &mut [ElevatorCar],
        pending: &mut PendingQueue,
        ledger: &RequestLedger,
    ) -> Vec<Assignment>;
}
