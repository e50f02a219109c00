//! Simulation observer trait for progress reporting and data collection.

use lift_car::ElevatorCar;
use lift_core::{PassengerRequest, RequestLedger, Tick};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — completion printer
///
/// ```rust,ignore
/// struct CompletionPrinter;
///
/// impl SimObserver for CompletionPrinter {
///     fn on_completion(&mut self, request: &PassengerRequest, elapsed: u64) {
///         println!("{} delivered after {elapsed} ticks", request.id());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once for every passenger delivered this tick.
    ///
    /// `elapsed` is the passenger's total trip time in ticks, arrival to
    /// destination.  The request is borrowed from the ledger, already marked
    /// completed.
    fn on_completion(&mut self, _request: &PassengerRequest, _elapsed: u64) {}

    /// Called at the end of each tick.
    ///
    /// `completed` is the number of passengers delivered this tick.
    fn on_tick_end(&mut self, _tick: Tick, _completed: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks).
    ///
    /// Provides read-only access to the fleet and the request ledger so that
    /// output writers can record state without the sim needing to know about
    /// any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _cars: &[ElevatorCar], _ledger: &RequestLedger) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
