use std::fmt;

use rodheat_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors raised while building a [`GridState`](crate::GridState).
///
/// Every variant is detected before any array is allocated, so a failed
/// construction leaves nothing partially built.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// A physical or numerical input is outside its valid range.
    #[error("invalid {parameter}: {source}")]
    InvalidParameter {
        parameter: Parameter,
        #[source]
        source: ConstraintError,
    },

    /// The requested space step would need more intervals than the grid allows.
    #[error("space step requires {requested} intervals, more than the limit of {limit}")]
    TooManyNodes { requested: f64, limit: usize },

    /// The duration would need more time steps than a run allows.
    #[error("duration requires {requested} time steps, more than the limit of {limit}")]
    TooManySteps { requested: f64, limit: usize },
}

impl Error {
    pub(crate) fn invalid(parameter: Parameter) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }
}

/// Names the run input that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Density,
    SpecificHeat,
    ThermalConductivity,
    Length,
    SpaceStep,
    TimeStep,
    Duration,
    InitialTemperature,
    LeftTemperature,
    RightTemperature,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::Density => "density",
            Parameter::SpecificHeat => "specific heat",
            Parameter::ThermalConductivity => "thermal conductivity",
            Parameter::Length => "rod length",
            Parameter::SpaceStep => "space step",
            Parameter::TimeStep => "time step",
            Parameter::Duration => "duration",
            Parameter::InitialTemperature => "initial temperature",
            Parameter::LeftTemperature => "left boundary temperature",
            Parameter::RightTemperature => "right boundary temperature",
        };
        f.write_str(name)
    }
}
