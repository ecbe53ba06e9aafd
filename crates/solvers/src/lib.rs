//! Solvers that drive a rodheat grid through simulated time.
//!
//! - [`transient::implicit`] — run a rod to a target time, or step it one
//!   time step at a time for interactive display
//! - [`sweep`] — center temperatures over a grid of (time step, space step)
//!   pairs, for convergence tables
//!
//! Every solver that takes an observer emits events between steps (or
//! between sweep cells) and honors a stop action at those points.

pub mod sweep;
pub mod transient;
