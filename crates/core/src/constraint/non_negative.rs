use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// # Examples
///
/// ```
/// use rodheat_core::constraint::{ConstraintError, NonNegative};
///
/// assert!(NonNegative::new(2.0).is_ok());
/// assert!(NonNegative::new(0.0).is_ok());
/// assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Fails if the value is negative or not a number.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
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
        assert_eq!(NonNegative::new(3).unwrap().into_inner(), 3);
        assert_eq!(NonNegative::new(0).unwrap().into_inner(), 0);
        assert_eq!(NonNegative::new(-1), Err(ConstraintError::Negative));
    }

    #[test]
    fn floats() {
        assert!(NonNegative::new(2.0).is_ok(), "Positive value is ok");
        assert!(NonNegative::new(0.0).is_ok(), "Zero value is ok");
        assert_eq!(
            NonNegative::new(-2.0),
            Err(ConstraintError::Negative),
            "Negative value is not ok"
        );
        assert_eq!(
            NonNegative::new(f64::NAN),
            Err(ConstraintError::NotANumber),
            "NaN is not ok"
        );
    }
}
