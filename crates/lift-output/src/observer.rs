//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_car::{DoorState, ElevatorCar};
use lift_core::{Heading, PassengerRequest, RequestLedger, Tick};
use lift_sim::SimObserver;

use crate::row::{FleetSnapshotRow, TickSummaryRow, TripRecordRow};
use crate::writer::OutputWriter;
use crate::{OutputError, TripStats};

/// A [`SimObserver`] that writes trip records, tick summaries, and fleet
/// snapshots to any [`OutputWriter`] backend (CSV, SQLite), while keeping a
/// running [`TripStats`] aggregate.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    stats: TripStats,
    delivered_this_tick: u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            stats: TripStats::new(),
            delivered_this_tick: 0,
            last_error: None,
        }
    }

    /// The running trip-time aggregate.
    pub fn stats(&self) -> TripStats {
        self.stats
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.delivered_this_tick = 0;
    }

    fn on_completion(&mut self, request: &PassengerRequest, elapsed: u64) {
        self.stats.record(elapsed);
        self.delivered_this_tick += 1;

        let completed_tick = match request.completed_tick() {
            Some(tick) => tick.0,
            None => return, // controller emits completed requests only
        };
        let row = TripRecordRow {
            request_id: request.id().0,
            origin_floor: request.origin_floor(),
            destination_floor: request.destination_floor(),
            arrival_tick: request.arrival_tick().0,
            completed_tick,
            elapsed_ticks: elapsed,
        };
        let result = self.writer.write_trip(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: Tick, _completed: usize) {
        let row = TickSummaryRow {
            tick: tick.0,
            delivered: self.delivered_this_tick,
            delivered_total: self.stats.delivered(),
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, cars: &[ElevatorCar], _ledger: &RequestLedger) {
        let rows: Vec<FleetSnapshotRow> = cars
            .iter()
            .map(|car| FleetSnapshotRow {
                car_id: car.id().0 as u32,
                tick: tick.0,
                floor: car.floor(),
                heading: match car.heading() {
                    Heading::Up => 1,
                    Heading::Down => -1,
                    Heading::Idle => 0,
                },
                door_open: car.door() == DoorState::Open,
                onboard: car.onboard().len() as u64,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
