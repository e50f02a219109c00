//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `trip_records`, `tick_summaries`, and `fleet_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{FleetSnapshotRow, OutputResult, TickSummaryRow, TripRecordRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trip_records (
                 request_id        INTEGER PRIMARY KEY,
                 origin_floor      INTEGER NOT NULL,
                 destination_floor INTEGER NOT NULL,
                 arrival_tick      INTEGER NOT NULL,
                 completed_tick    INTEGER NOT NULL,
                 elapsed_ticks     INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick            INTEGER PRIMARY KEY,
                 delivered       INTEGER NOT NULL,
                 delivered_total INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS fleet_snapshots (
                 car_id    INTEGER NOT NULL,
                 tick      INTEGER NOT NULL,
                 floor     INTEGER NOT NULL,
                 heading   INTEGER NOT NULL,
                 door_open INTEGER NOT NULL,
                 onboard   INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_trip(&mut self, row: &TripRecordRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO trip_records \
             (request_id, origin_floor, destination_floor, arrival_tick, completed_tick, elapsed_ticks) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.request_id,
                row.origin_floor,
                row.destination_floor,
                row.arrival_tick,
                row.completed_tick,
                row.elapsed_ticks,
            ],
        )?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, delivered, delivered_total) \
             VALUES (?1, ?2, ?3)",
            rusqlite::params![row.tick, row.delivered, row.delivered_total],
        )?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[FleetSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO fleet_snapshots \
                 (car_id, tick, floor, heading, door_open, onboard) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.car_id,
                    row.tick,
                    row.floor,
                    row.heading,
                    row.door_open as i64,
                    row.onboard,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
