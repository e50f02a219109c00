//! `lift-core` — foundational types for the `liftsim` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `CarId`, `RequestId`                                  |
//! | [`time`]      | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`config`]    | `BuildingConfig` (floors, fleet size, capacity)       |
//! | [`direction`] | `Direction` (travel), `Heading` (car)                 |
//! | [`request`]   | `PassengerRequest`, `RequestLedger`                   |
//! | [`rng`]       | `SimRng` (seeded, deterministic)                      |
//! | [`error`]     | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod request;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BuildingConfig;
pub use direction::{Direction, Heading};
pub use error::{CoreError, CoreResult};
pub use ids::{CarId, RequestId};
pub use request::{PassengerRequest, RequestLedger};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
