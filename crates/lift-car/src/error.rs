//! Car invariant violations.
//!
//! Everything here is fatal: these errors indicate a dispatcher or controller
//! logic defect, not a runtime condition to recover from.  Backpressure
//! (a full cabin, an incompatible stop) is expressed through return values,
//! never through this enum.

use lift_core::{CarId, CoreError, RequestId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarError {
    /// A request id held by a car has no ledger entry.
    #[error("request {request} on car {car} is not in the ledger")]
    UnknownRequest { car: CarId, request: RequestId },

    /// A cabin ended up holding more passengers than its capacity.
    #[error("car {car} over capacity: {count} onboard, capacity {capacity}")]
    OverCapacity { car: CarId, count: usize, capacity: usize },

    /// Completing an unloaded request failed (double completion or a
    /// pre-arrival tick) — the onboard set and ledger disagree.
    #[error("unload of request {request} on car {car} failed: {source}")]
    Unload {
        car: CarId,
        request: RequestId,
        source: CoreError,
    },
}

pub type CarResult<T> = Result<T, CarError>;
