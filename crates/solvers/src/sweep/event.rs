use uom::si::f64::{Length, Time};

use super::Cell;

/// Event emitted by an observed sweep after each cell is computed.
///
/// Cells are visited row-major: every space step of the first time step,
/// then every space step of the second, and so on.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Index into the time steps.
    pub row: usize,

    /// Index into the space steps.
    pub column: usize,

    pub time_step: Time,
    pub space_step: Length,

    /// The cell just computed.
    pub cell: &'a Cell,
}
