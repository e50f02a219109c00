//! `lift-output` — metrics accumulation and output writers for the liftsim
//! simulator.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                                 |
//! |-----------|---------|---------------------------------------------------------------|
//! | *(none)*  | CSV     | `trip_records.csv`, `tick_summaries.csv`, `fleet_snapshots.csv` |
//! | `sqlite`  | SQLite  | `output.db`                                                   |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `lift_sim::SimObserver` and also
//! keeps a running [`TripStats`] accumulator of per-passenger trip times.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! println!("mean trip: {:.1} ticks", obs.stats().mean_ticks());
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod stats;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{FleetSnapshotRow, TickSummaryRow, TripRecordRow};
pub use stats::TripStats;
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
