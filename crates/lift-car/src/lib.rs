//! `lift-car` — the elevator car state machine for the liftsim simulator.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`car`]   | `ElevatorCar`, `DoorState` — movement, doors, stop queue   |
//! | [`error`] | `CarError`, `CarResult<T>`                                 |
//!
//! # Car lifecycle per tick
//!
//! ```text
//! IDLE ──enqueue_stop──▶ MOVING ──reach head──▶ DOOR_OPEN ──▶ MOVING | IDLE
//! ```
//!
//! The controller drives each car once per tick: a car standing at the head
//! of its stop queue is serviced (doors open, unload then load); otherwise
//! `step()` closes any open door and moves the car one floor.  Door-open and
//! movement never happen in the same tick that the door opened.

pub mod car;
pub mod error;

#[cfg(test)]
mod tests;

pub use car::{DoorState, ElevatorCar};
pub use error::{CarError, CarResult};
