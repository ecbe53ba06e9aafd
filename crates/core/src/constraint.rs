//! Numeric invariants checked once, when a value enters the system.
//!
//! Run inputs such as densities, rod lengths, and time steps must be positive
//! and finite before a grid can be built from them. Wrapping a value in
//! [`Constrained<T, C>`] records that the check `C` has passed, so code that
//! receives the wrapper does not check again.
//!
//! Markers:
//!
//! - [`Finite`]: neither infinite nor NaN
//! - [`NonNegative`]: zero or greater
//! - [`StrictlyPositive`]: greater than zero
//!
//! Checks compose by unwrapping one and wrapping the value in the next:
//!
//! ```
//! use rodheat_core::constraint::{ConstraintError, Finite, StrictlyPositive};
//!
//! fn time_step(seconds: f64) -> Result<f64, ConstraintError> {
//!     let seconds = StrictlyPositive::new(seconds)?.into_inner();
//!     Ok(Finite::new(seconds)?.into_inner())
//! }
//!
//! assert_eq!(time_step(0.01), Ok(0.01));
//! assert_eq!(time_step(0.0), Err(ConstraintError::Zero));
//! assert_eq!(time_step(f64::INFINITY), Err(ConstraintError::Infinite));
//! ```
//!
//! New invariants are zero-sized marker types implementing [`Constraint<T>`].

mod finite;
mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use finite::Finite;
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A check that a value of type `T` must pass to be wrapped.
pub trait Constraint<T> {
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing why `value` is rejected.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was rejected by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
}

/// A value that has passed the check `C`.
///
/// The wrapper is transparent in memory and can only be built through
/// [`Constrained::new`] or a marker's constructor.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Wraps `value` if it passes `C`.
    ///
    /// # Errors
    ///
    /// Returns the error reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}
