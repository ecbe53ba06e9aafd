use rodheat_core::constraint::{Finite, NonNegative, StrictlyPositive};
use uom::si::{
    f64::{Length, Time},
    length::meter,
    time::second,
};

use crate::{Error, Parameter, Parameters};

/// Fewest intervals a grid may have; one interior node is the minimum.
pub const MIN_NODE_COUNT: usize = 2;

/// Most intervals a grid may have.
pub const MAX_NODE_COUNT: usize = 10_000_000;

/// Most time steps a run to completion may take.
pub const MAX_STEP_COUNT: usize = 100_000_000;

/// Coefficients of the implicit three-point stencil.
///
/// For interior node `i` the new temperatures satisfy
///
/// ```text
/// C·T[i-1] - B·T[i] + A·T[i+1] = -(ρc/τ)·T_old[i]
/// ```
///
/// with `A = C = λ/h²` and `B = 2λ/h² + ρc/τ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Coupling to the right neighbor.
    pub a: f64,
    /// Diagonal, including the implicit time term.
    pub b: f64,
    /// Coupling to the left neighbor.
    pub c: f64,
    /// `ρc/τ`, the factor of the previous-level source term.
    pub capacity_rate: f64,
}

impl Coefficients {
    fn new(
        density: f64,
        specific_heat: f64,
        conductivity: f64,
        spacing: f64,
        time_step: f64,
    ) -> Self {
        let capacity_rate = density * specific_heat / time_step;
        let off_diagonal = conductivity / spacing.powi(2);
        Self {
            a: off_diagonal,
            b: 2.0 * conductivity / spacing.powi(2) + capacity_rate,
            c: off_diagonal,
            capacity_rate,
        }
    }
}

/// The discretized rod and its temperature field for one run.
///
/// A grid of `Nx` intervals holds `Nx + 1` temperatures at `x_i = i·h`, where
/// `h = L / Nx` is the effective spacing. Node `0` is pinned to the left
/// boundary temperature and node `Nx` to the right one for the whole run.
///
/// A grid is built once from validated [`Parameters`] and advanced in place by
/// an [`ImplicitHeatStepper`](crate::ImplicitHeatStepper). To change any
/// parameter, build a new grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    node_count: usize,
    spacing: f64,
    time_step: f64,
    duration: f64,
    left: f64,
    right: f64,
    coefficients: Coefficients,
    temperatures: Vec<f64>,
    steps_taken: usize,
}

impl GridState {
    /// Builds a grid from run parameters.
    ///
    /// The interval count is `round(L / h)`, clamped up to [`MIN_NODE_COUNT`]
    /// when the requested step is too coarse for the rod. The clamp is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if a material property, the rod
    /// length, the space step, or the time step is not strictly positive and
    /// finite, if the duration is negative or not finite, or if a temperature
    /// is not finite.
    /// Returns [`Error::TooManyNodes`] if the grid would exceed
    /// [`MAX_NODE_COUNT`] intervals, and [`Error::TooManySteps`] if covering
    /// the duration would take more than [`MAX_STEP_COUNT`] steps.
    pub fn new(params: &Parameters) -> Result<Self, Error> {
        let (density, specific_heat, conductivity) = params.rod.material.to_si();
        let density = positive(density, Parameter::Density)?;
        let specific_heat = positive(specific_heat, Parameter::SpecificHeat)?;
        let conductivity = positive(conductivity, Parameter::ThermalConductivity)?;
        let length = positive(params.rod.length.get::<meter>(), Parameter::Length)?;

        let discretization = &params.discretization;
        let space_step = positive(discretization.space_step.get::<meter>(), Parameter::SpaceStep)?;
        let time_step = positive(discretization.time_step.get::<second>(), Parameter::TimeStep)?;
        let duration = NonNegative::new(discretization.duration.get::<second>())
            .map_err(Error::invalid(Parameter::Duration))
            .and_then(|d| finite(d.into_inner(), Parameter::Duration))?;

        check_step_count(duration, time_step)?;

        let temperatures = &params.temperatures;
        let initial = finite(temperatures.initial, Parameter::InitialTemperature)?;
        let left = finite(temperatures.left, Parameter::LeftTemperature)?;
        let right = finite(temperatures.right, Parameter::RightTemperature)?;

        let node_count = node_count(length, space_step)?;

        #[allow(clippy::cast_precision_loss)]
        let spacing = length / node_count as f64;

        let mut field = vec![initial; node_count + 1];
        field[0] = left;
        field[node_count] = right;

        Ok(Self {
            node_count,
            spacing,
            time_step,
            duration,
            left,
            right,
            coefficients: Coefficients::new(
                density,
                specific_heat,
                conductivity,
                spacing,
                time_step,
            ),
            temperatures: field,
            steps_taken: 0,
        })
    }

    /// Number of intervals `Nx`; the field has `Nx + 1` values.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Effective spacing `L / Nx` used by the coefficients.
    #[must_use]
    pub fn spacing(&self) -> Length {
        Length::new::<meter>(self.spacing)
    }

    /// Node positions `x_i = i·h`, from the left end.
    pub fn positions(&self) -> impl Iterator<Item = Length> + '_ {
        let spacing = self.spacing;
        #[allow(clippy::cast_precision_loss)]
        let position = move |i: usize| Length::new::<meter>(i as f64 * spacing);
        (0..=self.node_count).map(position)
    }

    /// Current temperatures, indexed `0..=Nx`.
    #[must_use]
    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    #[must_use]
    pub fn left_temperature(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right_temperature(&self) -> f64 {
        self.right
    }

    /// Index of the reported center node, `Nx / 2` rounded down.
    ///
    /// For an odd interval count this is the node just left of the midpoint.
    #[must_use]
    pub fn center_index(&self) -> usize {
        self.node_count / 2
    }

    #[must_use]
    pub fn center_temperature(&self) -> f64 {
        self.temperatures[self.center_index()]
    }

    #[must_use]
    pub fn time_step(&self) -> Time {
        Time::new::<second>(self.time_step)
    }

    /// Simulated duration requested for a run to completion.
    #[must_use]
    pub fn duration(&self) -> Time {
        Time::new::<second>(self.duration)
    }

    /// Steps needed to cover the duration: `max(1, round(t_end / τ))`.
    #[must_use]
    pub fn step_count(&self) -> usize {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (self.duration / self.time_step).round() as usize;
        steps.max(1)
    }

    /// Steps applied to this grid so far.
    #[must_use]
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Simulated time covered so far.
    #[must_use]
    pub fn elapsed(&self) -> Time {
        #[allow(clippy::cast_precision_loss)]
        let seconds = self.steps_taken as f64 * self.time_step;
        Time::new::<second>(seconds)
    }

    /// Consumes the grid and returns its temperatures.
    #[must_use]
    pub fn into_temperatures(self) -> Vec<f64> {
        self.temperatures
    }

    pub(crate) fn field_mut(&mut self) -> &mut [f64] {
        &mut self.temperatures
    }

    pub(crate) fn record_step(&mut self) {
        self.steps_taken += 1;
    }
}

fn positive(value: f64, parameter: Parameter) -> Result<f64, Error> {
    let value = StrictlyPositive::new(value).map_err(Error::invalid(parameter))?;
    finite(value.into_inner(), parameter)
}

fn finite(value: f64, parameter: Parameter) -> Result<f64, Error> {
    Finite::new(value)
        .map(|v| v.into_inner())
        .map_err(Error::invalid(parameter))
}

fn check_step_count(duration: f64, time_step: f64) -> Result<(), Error> {
    let requested = (duration / time_step).round();

    #[allow(clippy::cast_precision_loss)]
    let limit = MAX_STEP_COUNT as f64;
    if requested > limit {
        return Err(Error::TooManySteps {
            requested,
            limit: MAX_STEP_COUNT,
        });
    }
    Ok(())
}

fn node_count(length: f64, space_step: f64) -> Result<usize, Error> {
    let requested = (length / space_step).round();

    #[allow(clippy::cast_precision_loss)]
    let limit = MAX_NODE_COUNT as f64;
    if requested > limit {
        return Err(Error::TooManyNodes {
            requested,
            limit: MAX_NODE_COUNT,
        });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let requested_count = requested as usize;

    if requested_count < MIN_NODE_COUNT {
        log::warn!(
            "space step {space_step} m gives {requested_count} intervals on a {length} m rod, using {MIN_NODE_COUNT}"
        );
        return Ok(MIN_NODE_COUNT);
    }
    Ok(requested_count)
}
