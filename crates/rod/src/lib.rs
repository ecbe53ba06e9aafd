//! A homogeneous conducting rod with fixed end temperatures.
//!
//! This crate owns the physical description of a run and the numerical kernel
//! that advances it:
//!
//! - [`Material`], [`Rod`], and [`Preset`] — thermal properties and the
//!   named copper, aluminum, and steel presets
//! - [`Parameters`] — material, temperatures, and discretization for one run
//! - [`GridState`] — the validated grid, its stencil [`Coefficients`], and the
//!   temperature field
//! - [`ImplicitHeatStepper`] — one backward Euler step solved by tridiagonal
//!   (Thomas) elimination
//!
//! Orchestration (running to completion, table sweeps) lives in
//! `rodheat-solvers`.
//!
//! # Example
//!
//! ```
//! use rodheat_rod::{GridState, ImplicitHeatStepper, Parameters};
//!
//! let mut grid = GridState::new(&Parameters::default())?;
//! let mut stepper = ImplicitHeatStepper::for_grid(&grid);
//!
//! for _ in 0..grid.step_count() {
//!     stepper.step(&mut grid);
//! }
//!
//! let center = grid.center_temperature();
//! assert!(center > 30.0 && center < 300.0);
//! # Ok::<(), rodheat_rod::Error>(())
//! ```

mod error;
mod grid;
mod material;
mod params;
mod stepper;

pub use error::{Error, Parameter};
pub use grid::{Coefficients, GridState, MAX_NODE_COUNT, MAX_STEP_COUNT, MIN_NODE_COUNT};
pub use material::{Material, PRESET_ROD_LENGTH, Preset, Rod, UnknownPreset};
pub use params::{Discretization, Parameters, Temperatures};
pub use stepper::ImplicitHeatStepper;
