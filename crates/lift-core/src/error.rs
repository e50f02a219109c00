//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{RequestId, Tick};

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A request named a floor outside `0..floor_count`.  Rejected at
    /// ingestion; the simulation continues.
    #[error("floor {floor} outside building (valid floors 0..{floor_count})")]
    InvalidFloor { floor: u32, floor_count: u32 },

    /// A request whose origin equals its destination.  Rejected at ingestion.
    #[error("degenerate request: origin and destination are both floor {floor}")]
    DegenerateRequest { floor: u32 },

    /// `mark_completed` was called on an already-completed request.  Fatal —
    /// indicates a controller logic defect.
    #[error("request {0} already completed")]
    AlreadyCompleted(RequestId),

    /// A tick earlier than the request's arrival was supplied.
    #[error("tick {current} precedes arrival tick {arrival}")]
    InvalidTick { current: Tick, arrival: Tick },

    #[error("request {0} not found in ledger")]
    RequestNotFound(RequestId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
