//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `trip_records.csv`
//! - `tick_summaries.csv`
//! - `fleet_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FleetSnapshotRow, OutputResult, TickSummaryRow, TripRecordRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    trips: Writer<File>,
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trips = Writer::from_path(dir.join("trip_records.csv"))?;
        trips.write_record([
            "request_id",
            "origin_floor",
            "destination_floor",
            "arrival_tick",
            "completed_tick",
            "elapsed_ticks",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "delivered", "delivered_total"])?;

        let mut snapshots = Writer::from_path(dir.join("fleet_snapshots.csv"))?;
        snapshots.write_record(["car_id", "tick", "floor", "heading", "door_open", "onboard"])?;

        Ok(Self {
            trips,
            summaries,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trip(&mut self, row: &TripRecordRow) -> OutputResult<()> {
        self.trips.write_record(&[
            row.request_id.to_string(),
            row.origin_floor.to_string(),
            row.destination_floor.to_string(),
            row.arrival_tick.to_string(),
            row.completed_tick.to_string(),
            row.elapsed_ticks.to_string(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.delivered.to_string(),
            row.delivered_total.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[FleetSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.car_id.to_string(),
                row.tick.to_string(),
                row.floor.to_string(),
                row.heading.to_string(),
                (row.door_open as u8).to_string(),
                row.onboard.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush()?;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
