//! The `ElevatorCar` — floor-granularity movement, doors, and the SCAN
//! stop queue.
//!
//! # Stop queue ordering
//!
//! `stop_queue` holds distinct floors in service order.  The leading stops
//! form a monotone run in the car's heading (the current sweep); stops that
//! can only be served after reversing sit behind them.  Insertion places a
//! floor into the first path segment that passes over it, or at the tail if
//! no segment does — so a sweep picks up every stop it drives past and
//! deferred stops start the next sweep.
//!
//! # Heading invariant
//!
//! `heading` is `Idle` iff the stop queue and the cabin are both empty.
//! Every mutation re-derives the heading from the queue head, so the
//! invariant holds at every tick boundary.

use lift_core::{CarId, Direction, Heading, RequestId, RequestLedger, Tick};

use crate::{CarError, CarResult};

// ── DoorState ─────────────────────────────────────────────────────────────────

/// Door position.  Doors open when a stop is serviced and close at the start
/// of the next tick's movement.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum DoorState {
    Open,
    #[default]
    Closed,
}

// ── ElevatorCar ───────────────────────────────────────────────────────────────

/// One car of the fleet: current floor, heading, door state, onboard
/// passengers (by id), and the ordered stop queue.
#[derive(Clone, Debug)]
pub struct ElevatorCar {
    id: CarId,
    floor: u32,
    heading: Heading,
    door: DoorState,
    capacity: usize,
    onboard: Vec<RequestId>,
    stop_queue: Vec<u32>,
}

impl ElevatorCar {
    /// Create an idle car with closed doors at `floor`.
    pub fn new(id: CarId, floor: u32, capacity: usize) -> Self {
        Self {
            id,
            floor,
            heading: Heading::Idle,
            door: DoorState::Closed,
            capacity,
            onboard: Vec::new(),
            stop_queue: Vec::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[inline]
    pub fn floor(&self) -> u32 {
        self.floor
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    #[inline]
    pub fn door(&self) -> DoorState {
        self.door
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn onboard(&self) -> &[RequestId] {
        &self.onboard
    }

    #[inline]
    pub fn stop_queue(&self) -> &[u32] {
        &self.stop_queue
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.heading == Heading::Idle
    }

    /// Seats left in the cabin.
    #[inline]
    pub fn free_capacity(&self) -> usize {
        self.capacity - self.onboard.len()
    }

    /// Is the car standing at the head of its stop queue?
    #[inline]
    pub fn at_stop(&self) -> bool {
        self.stop_queue.first() == Some(&self.floor)
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Advance one tick of movement.
    ///
    /// An open door closes first (doors close at the start of the tick after
    /// they opened); the car then moves one floor toward the head of its
    /// stop queue and opens its door on arrival.  A car that opened its door
    /// this tick never also moved this tick — arrival is the only way both
    /// happen, and then the movement preceded the opening.
    ///
    /// Calling `step` on an idle car with an empty queue changes nothing.
    pub fn step(&mut self) {
        if self.door == DoorState::Open {
            self.door = DoorState::Closed;
        }
        let Some(&target) = self.stop_queue.first() else {
            return;
        };
        if target == self.floor {
            self.door = DoorState::Open;
            return;
        }
        self.heading = Heading::toward(self.floor, target);
        match self.heading {
            Heading::Up => self.floor += 1,
            Heading::Down => self.floor -= 1,
            Heading::Idle => {}
        }
        if self.floor == target {
            self.door = DoorState::Open;
        }
    }

    // ── Stop queue ────────────────────────────────────────────────────────

    /// Ask the car to stop at `floor` for a passenger travelling in
    /// `direction`.
    ///
    /// Returns `true` if the stop is scheduled (or already was).  An idle
    /// car accepts any floor and starts heading toward it (a stop at the
    /// current floor adopts the passenger's direction instead).  A moving
    /// car accepts the stop only when it serves the same direction and the
    /// floor lies ahead on the current sweep; otherwise the stop is deferred
    /// (`false`) — the caller retries on a later tick, and destinations are
    /// re-added at boarding by [`load_from`][Self::load_from].
    pub fn enqueue_stop(&mut self, floor: u32, direction: Direction) -> bool {
        if self.stop_queue.contains(&floor) {
            return true;
        }
        match self.heading {
            Heading::Idle => {
                self.heading = if floor == self.floor {
                    direction.into()
                } else {
                    Heading::toward(self.floor, floor)
                };
                self.stop_queue.push(floor);
                true
            }
            Heading::Up => {
                if direction == Direction::Up && floor >= self.floor {
                    self.insert_stop(floor);
                    true
                } else {
                    false
                }
            }
            Heading::Down => {
                if direction == Direction::Down && floor <= self.floor {
                    self.insert_stop(floor);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Place `floor` into the first path segment that passes over it, or at
    /// the tail if no segment does.  Callers have already deduplicated.
    /// The current floor goes to the head: the car is already there, so the
    /// stop is serviceable this tick.
    fn insert_stop(&mut self, floor: u32) {
        if floor == self.floor {
            self.stop_queue.insert(0, floor);
            return;
        }
        let mut prev = self.floor;
        for i in 0..self.stop_queue.len() {
            let next = self.stop_queue[i];
            let (lo, hi) = if prev <= next { (prev, next) } else { (next, prev) };
            if floor >= lo && floor <= hi && floor != prev {
                self.stop_queue.insert(i, floor);
                return;
            }
            prev = next;
        }
        self.stop_queue.push(floor);
    }

    // ── Load / unload ─────────────────────────────────────────────────────

    /// Service the head stop: open doors, let out every passenger destined
    /// for this floor, and record their completion in the ledger.
    ///
    /// Pops the head stop and re-derives the heading.  Returns the completed
    /// request ids for metrics.
    ///
    /// # Errors
    ///
    /// Fatal [`CarError`] if an onboard id has no ledger entry or its
    /// completion fails — the onboard set and ledger disagree, which only a
    /// logic defect can cause.
    pub fn unload_arrivals(
        &mut self,
        ledger: &mut RequestLedger,
        now: Tick,
    ) -> CarResult<Vec<RequestId>> {
        debug_assert!(self.at_stop(), "unload_arrivals called away from a stop");
        self.door = DoorState::Open;

        // Collect first (immutable scan), then mutate.
        let mut leaving = Vec::new();
        for &id in &self.onboard {
            let request = ledger
                .get(id)
                .ok_or(CarError::UnknownRequest { car: self.id, request: id })?;
            if request.destination_floor() == self.floor {
                leaving.push(id);
            }
        }

        for &id in &leaving {
            ledger
                .mark_completed(id, now)
                .map_err(|source| CarError::Unload { car: self.id, request: id, source })?;
        }
        self.onboard.retain(|id| !leaving.contains(id));

        if self.stop_queue.first() == Some(&self.floor) {
            self.stop_queue.remove(0);
        }
        self.retarget();
        Ok(leaving)
    }

    /// Board waiting passengers, oldest first, up to the cabin's free
    /// capacity.  Each admitted passenger's destination is added to the stop
    /// queue if not already present.
    ///
    /// Returns the ids that did not fit — normal backpressure, to be retried
    /// on a later visit or by another car.
    ///
    /// # Errors
    ///
    /// Fatal [`CarError`] for a candidate with no ledger entry, or if the
    /// cabin somehow ends up over capacity.
    pub fn load_from(
        &mut self,
        candidates: Vec<RequestId>,
        ledger: &RequestLedger,
    ) -> CarResult<Vec<RequestId>> {
        let seats = self.free_capacity();
        let mut deferred = Vec::new();

        for (i, id) in candidates.into_iter().enumerate() {
            if i < seats {
                let request = ledger
                    .get(id)
                    .ok_or(CarError::UnknownRequest { car: self.id, request: id })?;
                self.onboard.push(id);
                let dest = request.destination_floor();
                if !self.stop_queue.contains(&dest) {
                    self.insert_stop(dest);
                }
            } else {
                deferred.push(id);
            }
        }

        if self.onboard.len() > self.capacity {
            return Err(CarError::OverCapacity {
                car: self.id,
                count: self.onboard.len(),
                capacity: self.capacity,
            });
        }
        self.retarget();
        Ok(deferred)
    }

    /// Re-derive the heading from the queue head.  Empty queue means an
    /// empty cabin (every onboard destination is queued), so the car goes
    /// idle.
    fn retarget(&mut self) {
        self.heading = match self.stop_queue.first() {
            Some(&next) if next != self.floor => Heading::toward(self.floor, next),
            Some(_) => self.heading,
            None => Heading::Idle,
        };
    }
}
