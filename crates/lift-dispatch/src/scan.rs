//! `ScanPolicy` — nearest compatible car, SCAN sweeps.
//!
//! # Cost function
//!
//! For each pending request (processed in arrival order), every car gets a
//! cost:
//!
//! - **Idle car**: distance from the car's floor to the origin.
//! - **Moving car whose heading serves the request's direction and whose
//!   sweep still passes the origin**: distance to the origin.
//! - **Anything else**: incompatible this tick — the car is reconsidered
//!   once it goes idle or reverses.
//!
//! A car with no free seats is incompatible for new pickups regardless of
//! position: assigning it would pin the sweep to a floor it cannot board
//! from.  It competes again as soon as a passenger gets off.
//!
//! The minimum-cost car wins; ties go to the lowest car id.  If every car is
//! incompatible the request simply stays pending.

use lift_car::ElevatorCar;
use lift_core::{Heading, PassengerRequest, RequestLedger, Tick};

use crate::{Assignment, DispatchPolicy, PendingQueue};

/// The default scheduling policy: SCAN with nearest-compatible-car
/// assignment.
pub struct ScanPolicy;

impl ScanPolicy {
    /// Distance cost for serving `request` with `car`, or `None` when the
    /// car is full or cannot reach the origin without reversing.
    fn cost(car: &ElevatorCar, request: &PassengerRequest) -> Option<u32> {
        if car.free_capacity() == 0 {
            return None;
        }
        let origin = request.origin_floor();
        let ahead = match car.heading() {
            Heading::Idle => return Some(car.floor().abs_diff(origin)),
            Heading::Up => origin >= car.floor(),
            Heading::Down => origin <= car.floor(),
        };
        if ahead && car.heading().matches(request.direction()) {
            Some(car.floor().abs_diff(origin))
        } else {
            None
        }
    }
}

impl DispatchPolicy for ScanPolicy {
    fn assign(
        &self,
        _now: Tick,
        cars: &mut [ElevatorCar],
        pending: &mut PendingQueue,
        ledger: &RequestLedger,
    ) -> Vec<Assignment> {
        let mut assignments = Vec::new();

        // Earlier assignments update car headings and queues, so later
        // pending requests see the evolved fleet, not a stale snapshot.
        let candidates: Vec<_> = pending.ids().collect();
        for id in candidates {
            let Some(request) = ledger.get(id) else {
                continue;
            };

            // Strict `<` keeps the first (lowest-id) car on cost ties; the
            // fleet slice is ordered by car id.
            let mut best: Option<(u32, usize)> = None;
            for (i, car) in cars.iter().enumerate() {
                if let Some(cost) = Self::cost(car, request)
                    && best.is_none_or(|(c, _)| cost < c)
                {
                    best = Some((cost, i));
                }
            }

            let Some((_, i)) = best else {
                continue; // no compatible car this tick — stays pending
            };

            let car = &mut cars[i];
            car.enqueue_stop(request.origin_floor(), request.direction());
            car.enqueue_stop(request.destination_floor(), request.direction());
            pending.remove(id);
            assignments.push(Assignment { request: id, car: car.id() });
        }

        assignments
    }
}
