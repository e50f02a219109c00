//! The `OutputWriter` trait implemented by all backend writers.

use crate::{FleetSnapshotRow, OutputResult, TickSummaryRow, TripRecordRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`].
///
/// [`SimOutputObserver::take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write one completed trip.
    fn write_trip(&mut self, row: &TripRecordRow) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write a batch of fleet snapshots.
    fn write_snapshots(&mut self, rows: &[FleetSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
