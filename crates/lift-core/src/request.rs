//! Passenger requests and the ledger that owns them.
//!
//! # Design
//!
//! A [`PassengerRequest`] is an immutable-origin entity: every field except
//! the completion tick is fixed at construction.  The travel direction is
//! derived from the floor pair and never independently settable, so it can
//! never disagree with origin/destination.  The completion tick has a
//! one-time-write contract enforced by [`mark_completed`] — not by
//! convention.
//!
//! Requests live in a [`RequestLedger`] (a `Vec` indexed by [`RequestId`])
//! for the whole run: completed requests are retained for metrics, never
//! deleted.  Cars and queues refer to requests by id only.
//!
//! [`mark_completed`]: PassengerRequest::mark_completed

use crate::{CoreError, CoreResult, Direction, RequestId, Tick};

// ── PassengerRequest ──────────────────────────────────────────────────────────

/// A single passenger's trip: where they appeared, where they want to go,
/// when they arrived, and (once served) when they got there.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerRequest {
    id: RequestId,
    origin_floor: u32,
    destination_floor: u32,
    arrival_tick: Tick,
    direction: Direction,
    completed_tick: Option<Tick>,
}

impl PassengerRequest {
    /// Construct a request, validating both floors against the building.
    ///
    /// # Errors
    ///
    /// `InvalidFloor` if either floor is outside `0..floor_count`;
    /// `DegenerateRequest` if origin equals destination.
    pub fn new(
        id: RequestId,
        origin_floor: u32,
        destination_floor: u32,
        arrival_tick: Tick,
        floor_count: u32,
    ) -> CoreResult<Self> {
        for floor in [origin_floor, destination_floor] {
            if floor >= floor_count {
                return Err(CoreError::InvalidFloor { floor, floor_count });
            }
        }
        if origin_floor == destination_floor {
            return Err(CoreError::DegenerateRequest { floor: origin_floor });
        }
        Ok(Self {
            id,
            origin_floor,
            destination_floor,
            arrival_tick,
            direction: Direction::between(origin_floor, destination_floor),
            completed_tick: None,
        })
    }

    #[inline]
    pub fn id(&self) -> RequestId {
        self.id
    }

    #[inline]
    pub fn origin_floor(&self) -> u32 {
        self.origin_floor
    }

    #[inline]
    pub fn destination_floor(&self) -> u32 {
        self.destination_floor
    }

    #[inline]
    pub fn arrival_tick(&self) -> Tick {
        self.arrival_tick
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The tick at which the passenger reached their destination, if served.
    #[inline]
    pub fn completed_tick(&self) -> Option<Tick> {
        self.completed_tick
    }

    /// Has the passenger reached their destination?
    #[inline]
    pub fn has_completed(&self) -> bool {
        self.completed_tick.is_some()
    }

    /// Record the destination-reached tick.  One-time write.
    ///
    /// # Errors
    ///
    /// `AlreadyCompleted` if a completion tick is already set;
    /// `InvalidTick` if `tick` precedes the arrival tick.
    pub fn mark_completed(&mut self, tick: Tick) -> CoreResult<()> {
        if self.completed_tick.is_some() {
            return Err(CoreError::AlreadyCompleted(self.id));
        }
        if tick < self.arrival_tick {
            return Err(CoreError::InvalidTick { current: tick, arrival: self.arrival_tick });
        }
        self.completed_tick = Some(tick);
        Ok(())
    }

    /// Total trip time in ticks: `completed - arrival` once served, else
    /// `current_tick - arrival` (time waited so far).
    ///
    /// Frozen under repeated calls after completion.
    ///
    /// # Errors
    ///
    /// `InvalidTick` if `current_tick` precedes the arrival tick.
    pub fn elapsed(&self, current_tick: Tick) -> CoreResult<u64> {
        if current_tick < self.arrival_tick {
            return Err(CoreError::InvalidTick { current: current_tick, arrival: self.arrival_tick });
        }
        Ok(match self.completed_tick {
            Some(done) => done.since(self.arrival_tick),
            None => current_tick.since(self.arrival_tick),
        })
    }
}

// ── RequestLedger ─────────────────────────────────────────────────────────────

/// Owns every request ever created during a run, indexed by [`RequestId`].
///
/// The ledger only grows; completed requests stay in place so end-of-run
/// metrics can walk the full population.
#[derive(Default)]
pub struct RequestLedger {
    requests: Vec<PassengerRequest>,
}

impl RequestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store a new request, assigning it the next free id.
    ///
    /// # Errors
    ///
    /// Propagates the construction errors of [`PassengerRequest::new`]; on
    /// error nothing is stored.
    pub fn create(
        &mut self,
        origin_floor: u32,
        destination_floor: u32,
        arrival_tick: Tick,
        floor_count: u32,
    ) -> CoreResult<RequestId> {
        let id = RequestId(self.requests.len() as u32);
        let request =
            PassengerRequest::new(id, origin_floor, destination_floor, arrival_tick, floor_count)?;
        self.requests.push(request);
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: RequestId) -> Option<&PassengerRequest> {
        self.requests.get(id.index())
    }

    /// Record `id`'s completion at `tick`.
    ///
    /// # Errors
    ///
    /// `RequestNotFound` for an unknown id, plus the one-time-write errors of
    /// [`PassengerRequest::mark_completed`].
    pub fn mark_completed(&mut self, id: RequestId, tick: Tick) -> CoreResult<()> {
        let request = self
            .requests
            .get_mut(id.index())
            .ok_or(CoreError::RequestNotFound(id))?;
        request.mark_completed(tick)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PassengerRequest> {
        self.requests.iter()
    }

    /// Number of requests that have reached their destination.
    pub fn completed_count(&self) -> usize {
        self.requests.iter().filter(|r| r.has_completed()).count()
    }

    /// Have all requests ever created reached their destination?
    pub fn all_completed(&self) -> bool {
        self.requests.iter().all(|r| r.has_completed())
    }
}
