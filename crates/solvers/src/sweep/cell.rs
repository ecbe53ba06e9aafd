use std::fmt;

use rodheat_rod::Error;

/// One entry of a sweep table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// Center temperature after the configured duration.
    Value(f64),

    /// The run for this cell produced no usable value.
    Unavailable(Unavailable),
}

/// Why a sweep cell holds no value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unavailable {
    /// The (time step, space step) pair failed grid validation.
    InvalidParameter(Error),

    /// The run completed but its center temperature is not finite.
    NonFinite(f64),

    /// An observer stopped the sweep before this cell was computed.
    Skipped,
}

impl Cell {
    /// The center temperature, if this cell holds one.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Cell::Value(value) => Some(*value),
            Cell::Unavailable(_) => None,
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Cell::Value(_))
    }
}

/// Values print with two decimals; unavailable cells print as `—`.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Value(value) => f.pad(&format!("{value:.2}")),
            Cell::Unavailable(_) => f.pad("—"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_print_with_two_decimals() {
        assert_eq!(Cell::Value(123.456).to_string(), "123.46");
        assert_eq!(Cell::Value(-0.004).to_string(), "-0.00");
        assert_eq!(format!("{:>8}", Cell::Value(30.0)), "   30.00");
    }

    #[test]
    fn unavailable_cells_print_a_dash() {
        let cell = Cell::Unavailable(Unavailable::Skipped);
        assert_eq!(cell.to_string(), "—");
        assert_eq!(format!("{cell:>3}"), "  —");
        assert_eq!(cell.value(), None);
        assert!(!cell.is_available());
    }
}
