//! Center temperatures over a grid of (time step, space step) pairs.
//!
//! A sweep runs one complete simulation per pair and tabulates the center
//! temperature each run reaches, which shows how the result converges as the
//! steps shrink. Rows follow the time steps and columns follow the space
//! steps.
//!
//! Every cell is an independent run with its own grid, so [`sweep_table`]
//! computes cells in parallel. [`sweep_table_observed`] computes them in
//! row-major order on the calling thread and lets an observer stop between
//! cells.
//!
//! A pair that fails validation does not fail the sweep. Its cell becomes
//! [`Cell::Unavailable`] and the remaining cells are still computed.
//!
//! # Example
//!
//! ```
//! use rodheat_rod::Parameters;
//! use rodheat_solvers::sweep;
//! use uom::si::{f64::{Length, Time}, length::meter, time::second};
//!
//! let table = sweep::sweep_table(
//!     &Parameters::default(),
//!     &[Time::new::<second>(0.1), Time::new::<second>(0.01)],
//!     &[Length::new::<meter>(0.01)],
//! );
//!
//! assert_eq!(table.shape(), (2, 1));
//! assert!(table.cells().iter().all(sweep::Cell::is_available));
//! println!("{table}");
//! ```

mod action;
mod cell;
mod event;
mod table;

pub use action::Action;
pub use cell::{Cell, Unavailable};
pub use event::Event;
pub use table::Table;

pub use crate::transient::implicit::Status;

use rayon::prelude::*;
use rodheat_core::Observer;
use rodheat_rod::{Error, Parameters};
use uom::si::{
    f64::{Length, Time},
    length::meter,
    time::second,
};

use crate::transient::implicit;

/// Step sizes of the conventional convergence table, used for both axes.
pub const CONVENTIONAL_STEPS: [f64; 4] = [0.1, 0.01, 0.001, 0.0001];

/// [`CONVENTIONAL_STEPS`] as time steps in seconds.
#[must_use]
pub fn conventional_time_steps() -> Vec<Time> {
    CONVENTIONAL_STEPS
        .iter()
        .map(|&step| Time::new::<second>(step))
        .collect()
}

/// [`CONVENTIONAL_STEPS`] as space steps in meters.
#[must_use]
pub fn conventional_space_steps() -> Vec<Length> {
    CONVENTIONAL_STEPS
        .iter()
        .map(|&step| Length::new::<meter>(step))
        .collect()
}

/// Computes every cell of the table in parallel.
///
/// Each cell runs `params` to completion with the cell's time step and space
/// step substituted; material, temperatures, and duration are shared.
#[must_use]
pub fn sweep_table(params: &Parameters, time_steps: &[Time], space_steps: &[Length]) -> Table {
    let columns = space_steps.len();

    let cells = (0..time_steps.len() * columns)
        .into_par_iter()
        .map(|index| {
            center_cell(
                params,
                time_steps[index / columns],
                space_steps[index % columns],
            )
        })
        .collect();

    Table::new(
        time_steps.to_vec(),
        space_steps.to_vec(),
        cells,
        Status::Complete,
    )
}

/// Computes the table cell by cell in row-major order.
///
/// # Observer
///
/// The observer receives an [`Event`] after each cell and may return
/// [`Action::StopEarly`]; every cell not yet computed is then marked
/// [`Unavailable::Skipped`] and the table reports
/// [`Status::StoppedByObserver`].
pub fn sweep_table_observed<Obs>(
    params: &Parameters,
    time_steps: &[Time],
    space_steps: &[Length],
    mut observer: Obs,
) -> Table
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let total = time_steps.len() * space_steps.len();
    let mut cells = Vec::with_capacity(total);
    let mut status = Status::Complete;

    'sweep: for (row, &time_step) in time_steps.iter().enumerate() {
        for (column, &space_step) in space_steps.iter().enumerate() {
            let cell = center_cell(params, time_step, space_step);
            cells.push(cell);

            let event = Event {
                row,
                column,
                time_step,
                space_step,
                cell: &cell,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                status = Status::StoppedByObserver;
                break 'sweep;
            }
        }
    }

    cells.resize(total, Cell::Unavailable(Unavailable::Skipped));

    Table::new(time_steps.to_vec(), space_steps.to_vec(), cells, status)
}

/// Runs one cell and classifies its outcome.
fn center_cell(params: &Parameters, time_step: Time, space_step: Length) -> Cell {
    let params = params
        .with_time_step(time_step)
        .with_space_step(space_step);

    let cell = match implicit::solve_unobserved(&params) {
        Ok(solution) if solution.center_temperature.is_finite() => {
            Cell::Value(solution.center_temperature)
        }
        Ok(solution) => Cell::Unavailable(Unavailable::NonFinite(solution.center_temperature)),
        Err(
            error @ (Error::InvalidParameter { .. }
            | Error::TooManyNodes { .. }
            | Error::TooManySteps { .. }),
        ) => Cell::Unavailable(Unavailable::InvalidParameter(error)),
    };

    if let Cell::Unavailable(reason) = &cell {
        log::debug!(
            "sweep cell τ = {} s, h = {} m unavailable: {reason:?}",
            time_step.get::<second>(),
            space_step.get::<meter>(),
        );
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rodheat_core::constraint::ConstraintError;
    use rodheat_rod::Parameter;

    fn seconds(values: &[f64]) -> Vec<Time> {
        values.iter().map(|&v| Time::new::<second>(v)).collect()
    }

    fn meters(values: &[f64]) -> Vec<Length> {
        values.iter().map(|&v| Length::new::<meter>(v)).collect()
    }

    #[test]
    fn conventional_axes() {
        let taus = conventional_time_steps();
        let hs = conventional_space_steps();

        assert_eq!(taus.len(), 4);
        assert_eq!(hs.len(), 4);
        assert_relative_eq!(taus[3].get::<second>(), 0.0001);
        assert_relative_eq!(hs[0].get::<meter>(), 0.1);
    }

    #[test]
    fn cells_match_individual_runs() {
        let params = Parameters::default();
        let taus = seconds(&[0.1, 0.02]);
        let hs = meters(&[0.02, 0.01, 0.005]);

        let table = sweep_table(&params, &taus, &hs);

        assert_eq!(table.status(), Status::Complete);
        for (row, &tau) in taus.iter().enumerate() {
            for (column, &h) in hs.iter().enumerate() {
                let expected = implicit::solve_unobserved(
                    &params.with_time_step(tau).with_space_step(h),
                )
                .unwrap()
                .center_temperature;
                assert_eq!(table.get(row, column), Some(&Cell::Value(expected)));
            }
        }
    }

    #[test]
    fn invalid_cells_are_isolated() {
        let table = sweep_table(
            &Parameters::default(),
            &seconds(&[0.1, 0.0, 0.05]),
            &meters(&[0.01, -0.01]),
        );

        assert!(table.get(0, 0).unwrap().is_available());
        assert!(table.get(2, 0).unwrap().is_available());
        assert_eq!(
            table.get(1, 0),
            Some(&Cell::Unavailable(Unavailable::InvalidParameter(
                Error::InvalidParameter {
                    parameter: Parameter::TimeStep,
                    source: ConstraintError::Zero,
                }
            )))
        );
        assert_eq!(
            table.get(0, 1),
            Some(&Cell::Unavailable(Unavailable::InvalidParameter(
                Error::InvalidParameter {
                    parameter: Parameter::SpaceStep,
                    source: ConstraintError::Negative,
                }
            )))
        );
    }

    #[test]
    fn oversized_grids_are_unavailable() {
        let table = sweep_table(&Parameters::default(), &seconds(&[0.1]), &meters(&[1e-12]));

        assert!(matches!(
            table.get(0, 0),
            Some(Cell::Unavailable(Unavailable::InvalidParameter(
                Error::TooManyNodes { .. }
            )))
        ));
    }

    #[test]
    fn unreachable_durations_are_unavailable() {
        let table = sweep_table(
            &Parameters::default(),
            &seconds(&[1e-300, 0.1]),
            &meters(&[0.01]),
        );

        assert!(matches!(
            table.get(0, 0),
            Some(Cell::Unavailable(Unavailable::InvalidParameter(
                Error::TooManySteps { .. }
            )))
        ));
        assert!(table.get(1, 0).unwrap().is_available());
    }

    #[test]
    fn observed_sweep_visits_cells_row_major() {
        let mut visited = Vec::new();
        let table = sweep_table_observed(
            &Parameters::default(),
            &seconds(&[0.1, 0.05]),
            &meters(&[0.02, 0.01]),
            |event: &Event<'_>| {
                visited.push((event.row, event.column));
                None
            },
        );

        assert_eq!(visited, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(table.status(), Status::Complete);
    }

    #[test]
    fn stopping_skips_the_remaining_cells() {
        let table = sweep_table_observed(
            &Parameters::default(),
            &seconds(&[0.1, 0.05]),
            &meters(&[0.02, 0.01]),
            |event: &Event<'_>| (event.column == 1).then_some(Action::StopEarly),
        );

        assert_eq!(table.status(), Status::StoppedByObserver);
        assert!(table.get(0, 0).unwrap().is_available());
        assert!(table.get(0, 1).unwrap().is_available());
        assert_eq!(table.get(1, 0), Some(&Cell::Unavailable(Unavailable::Skipped)));
        assert_eq!(table.get(1, 1), Some(&Cell::Unavailable(Unavailable::Skipped)));
    }

    #[test]
    fn empty_axes_give_an_empty_table() {
        let table = sweep_table(&Parameters::default(), &[], &meters(&[0.01]));
        assert_eq!(table.shape(), (0, 1));
        assert!(table.cells().is_empty());

        let table = sweep_table_observed(&Parameters::default(), &seconds(&[0.1]), &[], ());
        assert_eq!(table.shape(), (1, 0));
        assert_eq!(table.status(), Status::Complete);
    }
}
