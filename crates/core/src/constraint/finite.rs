use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a floating-point value is finite.
///
/// Used for quantities without a sign constraint, such as temperatures,
/// that still must not be infinite or NaN.
///
/// # Examples
///
/// ```
/// use rodheat_core::constraint::{ConstraintError, Finite};
///
/// assert!(Finite::new(-40.0).is_ok());
/// assert_eq!(Finite::new(f64::INFINITY), Err(ConstraintError::Infinite));
/// assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Finite;

impl Finite {
    /// Constructs [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Fails if the value is infinite or not a number.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}
