//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across the implicit solver and the sweep.
//!
//! # Event traits
//!
//! - [`HasCenterTemperature`] — events that carry a center temperature
//! - [`HasElapsed`] — events that carry a simulated time
//! - [`HasField`] — events that carry the whole temperature field
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rodheat_core::Observer;
//! use rodheat_observers::traits::{CanStopEarly, HasCenterTemperature};
//!
//! struct WarmEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasCenterTemperature, A: CanStopEarly> Observer<E, A> for WarmEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.center_temperature() >= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use rodheat_solvers::{sweep, transient::implicit};
use uom::si::f64::Time;

/// An event that carries a center temperature.
pub trait HasCenterTemperature {
    /// Returns the center temperature for this event.
    ///
    /// Returns `f64::NAN` when the event has no value available.
    fn center_temperature(&self) -> f64;
}

/// An event that carries a simulated time.
pub trait HasElapsed {
    fn elapsed(&self) -> Time;
}

/// An event that carries the whole temperature field.
pub trait HasField {
    /// Returns temperatures at every node, indexed `0..=Nx`.
    fn field(&self) -> &[f64];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- implicit::Event ---

impl HasCenterTemperature for implicit::Event<'_> {
    fn center_temperature(&self) -> f64 {
        implicit::Event::center_temperature(self)
    }
}

impl HasElapsed for implicit::Event<'_> {
    fn elapsed(&self) -> Time {
        self.elapsed
    }
}

impl HasField for implicit::Event<'_> {
    fn field(&self) -> &[f64] {
        self.field
    }
}

// --- sweep::Event ---

impl HasCenterTemperature for sweep::Event<'_> {
    fn center_temperature(&self) -> f64 {
        self.cell.value().unwrap_or(f64::NAN)
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for implicit::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for sweep::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
