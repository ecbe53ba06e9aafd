use rodheat_rod::{Error, GridState, ImplicitHeatStepper, Parameters};
use uom::si::f64::Time;

use super::Event;

/// A single run that is advanced one time step at a time.
///
/// The simulation owns its grid and the stepper's working arrays, so two
/// simulations never share a field. Interactive callers drive it with
/// [`step_once`](Self::step_once) at their own pace and read the elapsed time
/// and center temperature for display. To change parameters, drop it and
/// build a new one.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: GridState,
    stepper: ImplicitHeatStepper,
}

impl Simulation {
    /// Builds the grid for a new run.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation; see
    /// [`GridState::new`].
    pub fn new(params: &Parameters) -> Result<Self, Error> {
        GridState::new(params).map(Self::from_grid)
    }

    /// Wraps an existing grid.
    #[must_use]
    pub fn from_grid(grid: GridState) -> Self {
        let stepper = ImplicitHeatStepper::for_grid(&grid);
        Self { grid, stepper }
    }

    /// Advances the field by one time step and returns it.
    pub fn step_once(&mut self) -> &[f64] {
        self.stepper.step(&mut self.grid)
    }

    #[must_use]
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    #[must_use]
    pub fn field(&self) -> &[f64] {
        self.grid.temperatures()
    }

    #[must_use]
    pub fn center_temperature(&self) -> f64 {
        self.grid.center_temperature()
    }

    #[must_use]
    pub fn elapsed(&self) -> Time {
        self.grid.elapsed()
    }

    #[must_use]
    pub fn steps_taken(&self) -> usize {
        self.grid.steps_taken()
    }

    /// Whether the configured duration has been covered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.grid.steps_taken() >= self.grid.step_count()
    }

    #[must_use]
    pub fn into_grid(self) -> GridState {
        self.grid
    }

    pub(super) fn event(&self) -> Event<'_> {
        Event {
            step: self.grid.steps_taken(),
            elapsed: self.grid.elapsed(),
            field: self.grid.temperatures(),
            center_index: self.grid.center_index(),
        }
    }
}
