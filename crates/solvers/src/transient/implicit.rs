//! Implicit (backward Euler) time stepping of a rod.
//!
//! Each time step solves the tridiagonal system of the three-point heat
//! equation stencil with Thomas elimination:
//!
//! ```text
//! C·T[i-1] - B·T[i] + A·T[i+1] = -(ρc/τ)·T_old[i]
//! ```
//!
//! The scheme is unconditionally stable, so any positive time step gives a
//! bounded, non-oscillating field.
//!
//! Two entry points share one [`Simulation`] type:
//!
//! - [`solve`] / [`solve_unobserved`] run a rod for its configured duration,
//!   `max(1, round(t_end / τ))` steps, and return the final field.
//! - [`Simulation::step_once`] advances a caller-owned run one step at a
//!   time, for animations and live readouts.
//!
//! # Example
//!
//! ```
//! use rodheat_rod::Parameters;
//! use rodheat_solvers::transient::implicit;
//!
//! let solution = implicit::solve_unobserved(&Parameters::default())?;
//!
//! assert_eq!(solution.steps, 200);
//! assert_eq!(solution.field.len(), 11);
//! println!("center: {:.2}", solution.center_temperature);
//! # Ok::<(), implicit::Error>(())
//! ```

mod action;
mod event;
mod simulation;
mod solution;

pub use action::Action;
pub use event::Event;
pub use rodheat_rod::Error;
pub use simulation::Simulation;
pub use solution::{Solution, Status};

use rodheat_core::Observer;
use rodheat_rod::Parameters;
use uom::si::time::second;

/// Runs a rod for its configured duration.
///
/// # Algorithm
///
/// 1. Build and validate the grid.
/// 2. Emit the initial field as step 0.
/// 3. For each of the `max(1, round(t_end / τ))` steps:
///    - Advance the field by one implicit step.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 4. Return the final field and its center temperature.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial field and after each
/// time step and may return [`Action::StopEarly`] to end the run between
/// steps.
///
/// # Errors
///
/// Returns an error if the parameters fail validation. Once the grid is
/// built, the run itself cannot fail.
pub fn solve<Obs>(params: &Parameters, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut simulation = Simulation::new(params)?;
    let steps = simulation.grid().step_count();

    log::debug!(
        "running {} intervals for {} steps of {} s",
        simulation.grid().node_count(),
        steps,
        simulation.grid().time_step().get::<second>(),
    );

    if let Some(Action::StopEarly) = observer.observe(&simulation.event()) {
        return Ok(Solution::from_grid(
            simulation.into_grid(),
            Status::StoppedByObserver,
        ));
    }

    for _ in 0..steps {
        simulation.step_once();

        if let Some(Action::StopEarly) = observer.observe(&simulation.event()) {
            return Ok(Solution::from_grid(
                simulation.into_grid(),
                Status::StoppedByObserver,
            ));
        }
    }

    Ok(Solution::from_grid(simulation.into_grid(), Status::Complete))
}

/// Runs a rod for its configured duration without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the parameters fail validation.
pub fn solve_unobserved(params: &Parameters) -> Result<Solution, Error> {
    solve(params, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rodheat_rod::{GridState, ImplicitHeatStepper, Parameter, Temperatures};
    use uom::si::{
        f64::{Length, Time},
        length::meter,
    };

    #[test]
    fn runs_the_configured_number_of_steps() {
        let solution = solve_unobserved(&Parameters::default()).expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 200);
        assert_eq!(solution.field.len(), 11);
        assert_relative_eq!(solution.elapsed.get::<second>(), 2.0, max_relative = 1e-12);
        assert_eq!(solution.center_temperature, solution.field[5]);
    }

    #[test]
    fn matches_stepping_by_hand() {
        let params = Parameters::default();
        let mut grid = GridState::new(&params).unwrap();
        let mut stepper = ImplicitHeatStepper::new();
        for _ in 0..grid.step_count() {
            stepper.step(&mut grid);
        }

        let solution = solve_unobserved(&params).unwrap();
        assert_eq!(solution.field, grid.temperatures());
    }

    #[test]
    fn zero_duration_takes_one_step() {
        let params = Parameters::default().with_duration(Time::new::<second>(0.0));
        let solution = solve_unobserved(&params).unwrap();

        assert_eq!(solution.steps, 1);
        assert_ne!(solution.field[1], 180.0);
    }

    #[test]
    fn odd_grid_reports_the_node_left_of_center() {
        // 0.1 m in steps of 1/3 of the rod gives Nx = 3 and center index 1.
        let params = Parameters::default().with_space_step(Length::new::<meter>(0.1 / 3.0));
        let solution = solve_unobserved(&params).unwrap();

        assert_eq!(solution.field.len(), 4);
        assert_eq!(solution.center_temperature, solution.field[1]);
        // Node 1 sits next to the hot end, so it is warmer than node 2.
        assert!(solution.field[1] > solution.field[2]);
    }

    #[test]
    fn invalid_parameters_fail_before_stepping() {
        let params = Parameters::default().with_time_step(Time::new::<second>(-0.01));
        let mut events = 0;

        let result = solve(&params, |_event: &Event<'_>| {
            events += 1;
            None
        });

        assert!(matches!(
            result,
            Err(Error::InvalidParameter {
                parameter: Parameter::TimeStep,
                ..
            })
        ));
        assert_eq!(events, 0);
    }

    #[test]
    fn observer_can_stop_early() {
        let observer = |event: &Event<'_>| {
            if event.step >= 5 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&Parameters::default(), observer).expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_relative_eq!(solution.elapsed.get::<second>(), 0.05, max_relative = 1e-12);
    }

    #[test]
    fn observer_can_stop_before_the_first_step() {
        let solution = solve(&Parameters::default(), |_event: &Event<'_>| {
            Some(Action::StopEarly)
        })
        .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.field[5], 180.0);
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let params = Parameters::default().with_duration(Time::new::<second>(0.04));

        let mut step_values = Vec::new();
        solve(&params, |event: &Event<'_>| {
            step_values.push(event.step);
            None
        })
        .expect("should solve");

        assert_eq!(step_values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn events_carry_the_live_readout() {
        let params = Parameters {
            temperatures: Temperatures::new(0.0, 100.0, 100.0),
            ..Parameters::default()
        };

        let mut readout = Vec::new();
        solve(&params, |event: &Event<'_>| {
            readout.push((event.elapsed.get::<second>(), event.center_temperature()));
            None
        })
        .unwrap();

        assert_eq!(readout.len(), 201);
        assert_eq!(readout[0], (0.0, 0.0));
        assert!(readout.windows(2).all(|w| w[1].0 > w[0].0));
        assert!(readout.windows(2).all(|w| w[1].1 >= w[0].1 - 1e-9));
    }
}
