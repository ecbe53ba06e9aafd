use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use rodheat_core::constraint::{ConstraintError, StrictlyPositive};
///
/// let density = StrictlyPositive::new(8960.0).unwrap();
/// assert_eq!(density.into_inner(), 8960.0);
///
/// assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
/// assert_eq!(StrictlyPositive::new(-1.0), Err(ConstraintError::Negative));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Fails if the value is zero, negative, or not a number.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert!(StrictlyPositive::new(1).is_ok());
        assert_eq!(StrictlyPositive::new(0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-3), Err(ConstraintError::Negative));
    }

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-300).is_ok());
        assert!(StrictlyPositive::new(f64::INFINITY).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-0.0), Err(ConstraintError::Zero));
        assert_eq!(
            StrictlyPositive::new(-0.01),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
