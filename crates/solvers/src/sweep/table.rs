use std::fmt;

use uom::si::{
    f64::{Length, Time},
    length::meter,
    time::second,
};

use super::{Cell, Status};

const COLUMN_WIDTH: usize = 10;

/// Center temperatures indexed by (time step, space step).
///
/// Rows follow the time steps and columns follow the space steps, in the
/// order they were given to the sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    time_steps: Vec<Time>,
    space_steps: Vec<Length>,
    cells: Vec<Cell>,
    status: Status,
}

impl Table {
    pub(super) fn new(
        time_steps: Vec<Time>,
        space_steps: Vec<Length>,
        cells: Vec<Cell>,
        status: Status,
    ) -> Self {
        debug_assert_eq!(cells.len(), time_steps.len() * space_steps.len());
        Self {
            time_steps,
            space_steps,
            cells,
            status,
        }
    }

    #[must_use]
    pub fn time_steps(&self) -> &[Time] {
        &self.time_steps
    }

    #[must_use]
    pub fn space_steps(&self) -> &[Length] {
        &self.space_steps
    }

    /// Whether every cell was computed or an observer stopped the sweep.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.time_steps.len(), self.space_steps.len())
    }

    /// The cell for time step `row` and space step `column`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        let (rows, columns) = self.shape();
        if row < rows && column < columns {
            self.cells.get(row * columns + column)
        } else {
            None
        }
    }

    /// Iterates over rows, one slice of cells per time step.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let columns = self.space_steps.len();
        (0..self.time_steps.len()).map(move |row| &self.cells[row * columns..(row + 1) * columns])
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Renders a header of space steps followed by one line per time step.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>COLUMN_WIDTH$}", "τ \\ h")?;
        for space_step in &self.space_steps {
            write!(f, " {:>COLUMN_WIDTH$}", space_step.get::<meter>())?;
        }

        for (time_step, row) in self.time_steps.iter().zip(self.rows()) {
            writeln!(f)?;
            write!(f, "{:>COLUMN_WIDTH$}", time_step.get::<second>())?;
            for cell in row {
                write!(f, " {cell:>COLUMN_WIDTH$}")?;
            }
        }
        Ok(())
    }
}
