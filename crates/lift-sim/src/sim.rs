//! The `Sim` struct and its tick loop.

use std::collections::{BTreeMap, HashSet};

use lift_car::ElevatorCar;
use lift_core::{
    BuildingConfig, CarId, CoreResult, RequestId, RequestLedger, SimClock, SimConfig, Tick,
};
use lift_dispatch::{DispatchPolicy, PendingQueue};

use crate::{SimObserver, SimResult};

/// Assigned-but-not-boarded requests, keyed by carrier car.
#[cfg(feature = "fx-hash")]
type CarrierMap = rustc_hash::FxHashMap<CarId, Vec<RequestId>>;
#[cfg(not(feature = "fx-hash"))]
type CarrierMap = std::collections::HashMap<CarId, Vec<RequestId>>;

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner: fleet controller and tick loop.
///
/// `Sim<P>` owns the fleet, the request ledger, and the pending queue, and
/// drives the four-phase tick loop:
///
/// 1. **Admit**: requests whose arrival tick has been reached enter the
///    pending queue.
/// 2. **Dispatch**: the policy assigns pending requests to cars and
///    schedules their stops; each assignment records the car as the
///    request's carrier.
/// 3. **Cars** (sequential, ascending `CarId` for determinism): a car
///    standing at the head of its stop queue is serviced — doors open,
///    arrivals unload and complete, then the carrier's waiting passengers
///    at this floor board FIFO up to capacity.  Any other car steps one
///    floor.  Passengers bounced by a full cabin return to the pending
///    queue.
/// 4. **Report**: the observer hears each completion; the clock advances.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DispatchPolicy> {
    /// Static building parameters (floors, fleet size, capacity).
    pub building: BuildingConfig,

    /// Run configuration (total ticks, seed, output interval).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// The fleet, ordered by `CarId` and fixed in size for the run.
    pub cars: Vec<ElevatorCar>,

    /// Every request ever ingested, retained for metrics.
    pub ledger: RequestLedger,

    /// Unassigned requests in stable arrival order.
    pub pending: PendingQueue,

    /// The dispatch policy.  Called exactly once per tick.
    pub policy: P,

    /// Requests scheduled for a future tick, keyed by arrival tick.
    pub(crate) arrivals: BTreeMap<Tick, Vec<RequestId>>,

    /// Assigned requests waiting at their origin floor, per carrier.
    pub(crate) waiting: CarrierMap,

    /// Requests withdrawn before assignment; excluded from exhaustion.
    pub(crate) withdrawn: HashSet<RequestId>,
}

impl<P: DispatchPolicy> Sim<P> {
    // ── Ingestion ─────────────────────────────────────────────────────────

    /// Ingest a passenger request.
    ///
    /// Floors are validated against the building here — a rejected request
    /// is never stored, and the simulation continues.  A request whose
    /// arrival tick has already been reached joins the pending queue at
    /// once; future arrivals are buffered and admitted on their tick.
    ///
    /// # Errors
    ///
    /// `InvalidFloor` for a floor outside the building,
    /// `DegenerateRequest` when origin equals destination.
    pub fn push_request(
        &mut self,
        origin_floor: u32,
        destination_floor: u32,
        arrival_tick: Tick,
    ) -> CoreResult<RequestId> {
        let id = self.ledger.create(
            origin_floor,
            destination_floor,
            arrival_tick,
            self.building.floor_count,
        )?;
        if arrival_tick <= self.clock.current_tick {
            self.pending.insert(arrival_tick, id);
        } else {
            self.arrivals.entry(arrival_tick).or_default().push(id);
        }
        Ok(id)
    }

    /// Withdraw a request that has not been assigned to a car yet.
    ///
    /// Returns `false` when the request is already assigned, onboard,
    /// completed, or unknown — once a car is committed the trip runs to its
    /// end.
    pub fn withdraw(&mut self, id: RequestId) -> bool {
        let mut removed = self.pending.remove(id);
        if !removed {
            for ids in self.arrivals.values_mut() {
                if let Some(pos) = ids.iter().position(|&r| r == id) {
                    ids.remove(pos);
                    removed = true;
                    break;
                }
            }
            self.arrivals.retain(|_, ids| !ids.is_empty());
        }
        if removed {
            self.withdrawn.insert(id);
        }
        removed
    }

    /// Has every ingested request been delivered (or withdrawn), with
    /// nothing pending or waiting?
    ///
    /// The controller only reports exhaustion — the driver decides when to
    /// stop the run.
    pub fn exhausted(&self) -> bool {
        self.pending.is_empty()
            && self.arrivals.is_empty()
            && self.waiting.values().all(Vec::is_empty)
            && self
                .ledger
                .iter()
                .all(|r| r.has_completed() || self.withdrawn.contains(&r.id()))
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }

            observer.on_tick_start(now);
            let delivered = self.process_tick(now, observer)?;
            observer.on_tick_end(now, delivered);
            if self.config.output_interval_ticks > 0
                && now.0.is_multiple_of(self.config.output_interval_ticks)
            {
                observer.on_snapshot(now, &self.cars, &self.ledger);
            }

            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let delivered = self.process_tick(now, observer)?;
            observer.on_tick_end(now, delivered);
            if self.config.output_interval_ticks > 0
                && now.0.is_multiple_of(self.config.output_interval_ticks)
            {
                observer.on_snapshot(now, &self.cars, &self.ledger);
            }
            self.clock.advance();
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<usize> {
        // ── Phase 1: admit scheduled arrivals ─────────────────────────────
        while let Some(entry) = self.arrivals.first_entry() {
            if *entry.key() > now {
                break;
            }
            let (tick, ids) = entry.remove_entry();
            for id in ids {
                self.pending.insert(tick, id);
            }
        }

        // ── Phase 2: dispatch ─────────────────────────────────────────────
        //
        // The policy gets the fleet and the pending queue for exactly one
        // call; assignments are recorded so each stop knows which waiting
        // passengers belong to which car.
        let assignments = self
            .policy
            .assign(now, &mut self.cars, &mut self.pending, &self.ledger);
        for a in &assignments {
            self.waiting.entry(a.car).or_default().push(a.request);
        }

        // ── Phase 3: service or move each car ─────────────────────────────
        //
        // Ascending car id, strictly sequential.  A car arriving at a stop
        // this tick is serviced in the same tick; it will not move again
        // until the tick after its doors opened.
        let mut delivered = 0;
        for i in 0..self.cars.len() {
            if !self.cars[i].at_stop() {
                self.cars[i].step();
            }
            if !self.cars[i].at_stop() {
                continue;
            }

            // Unload: passengers at their destination leave and complete.
            let completed = self.cars[i].unload_arrivals(&mut self.ledger, now)?;
            for &id in &completed {
                if let Some(request) = self.ledger.get(id) {
                    observer.on_completion(request, request.elapsed(now)?);
                }
            }
            delivered += completed.len();

            // Load: the carrier's waiting passengers at this floor, FIFO.
            let floor = self.cars[i].floor();
            let carrier = self.cars[i].id();
            let mut candidates = Vec::new();
            if let Some(list) = self.waiting.get_mut(&carrier) {
                let ledger = &self.ledger;
                list.retain(|&id| {
                    let at_floor = ledger.get(id).is_some_and(|r| r.origin_floor() == floor);
                    if at_floor {
                        candidates.push(id);
                    }
                    !at_floor
                });
            }
            let deferred = self.cars[i].load_from(candidates, &self.ledger)?;

            // A full cabin bounces passengers back to the pending queue at
            // their original position; the dispatcher retries them next
            // tick — the same car on a later visit, or another car.
            for id in deferred {
                if let Some(request) = self.ledger.get(id) {
                    self.pending.insert(request.arrival_tick(), id);
                }
            }
        }

        Ok(delivered)
    }
}
