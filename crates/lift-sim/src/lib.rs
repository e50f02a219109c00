//! `lift-sim` — tick loop orchestrator for the liftsim elevator simulator.
//!
//! # Tick procedure
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Admit     — requests whose arrival tick has been reached enter the
//!                 pending queue (stable arrival order).
//!   ② Dispatch  — the DispatchPolicy assigns pending requests to cars and
//!                 schedules their stops; assigned requests wait at their
//!                 origin floor for the recorded carrier.
//!   ③ Cars      — in ascending car id order: a car standing at the head of
//!                 its stop queue is serviced (doors open, unload then
//!                 load); otherwise it steps one floor.  Passengers bounced
//!                 by a full cabin return to the pending queue.
//!   ④ Report    — completions reach the observer; the clock advances.
//! ```
//!
//! Dispatch always precedes movement within a tick, and no state of tick N
//! is observable before tick N-1 has completed — the loop is strictly
//! sequential.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{BuildingConfig, SimConfig, Tick};
//! use lift_dispatch::ScanPolicy;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(building, config, ScanPolicy).build()?;
//! sim.push_request(0, 4, Tick(0))?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
