//! Reusable observers for rodheat solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the implicit solver and the sweep.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasCenterTemperature`], [`HasElapsed`], [`HasField`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`CancelToken`] — stops a run or sweep when another thread asks
//! - [`History`] — records elapsed time and center temperature
//! - [`SteadyState`] — stops once the field stops changing
//!
//! [`Observer`]: rodheat_core::Observer
//! [`HasCenterTemperature`]: traits::HasCenterTemperature
//! [`HasElapsed`]: traits::HasElapsed
//! [`HasField`]: traits::HasField
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod cancel;
mod history;
mod steady_state;

pub use cancel::CancelToken;
pub use history::{History, Sample};
pub use steady_state::SteadyState;
