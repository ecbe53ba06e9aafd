use crate::{Coefficients, GridState};

/// Advances a [`GridState`] by one implicit (backward Euler) time step.
///
/// Each step solves the tridiagonal system of the three-point stencil with
/// the Thomas algorithm:
///
/// 1. Seed `alpha[0] = 0`, `beta[0] = Ta`.
/// 2. Forward sweep over interior nodes `i = 1..Nx-1`, with the previous
///    level as source `F_i = -(ρc/τ)·T[i]`:
///
///    ```text
///    alpha[i] = A / (B - C·alpha[i-1])
///    beta[i]  = (C·beta[i-1] - F_i) / (B - C·alpha[i-1])
///    ```
///
/// 3. Pin `T[0] = Ta` and `T[Nx] = Tb`.
/// 4. Back-substitute `T[i] = alpha[i]·T[i+1] + beta[i]` for `i = Nx-1..1`.
///
/// The forward sweep reads `T[i]` before back-substitution overwrites it, so
/// the new level is written straight into the grid's field.
///
/// The two coefficient arrays are the stepper's only storage. They are
/// rebuilt on every call and resized to whatever grid is passed in, so one
/// stepper can serve successive runs.
#[derive(Debug, Clone, Default)]
pub struct ImplicitHeatStepper {
    alpha: Vec<f64>,
    beta: Vec<f64>,
}

impl ImplicitHeatStepper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stepper with arrays already sized for `grid`.
    #[must_use]
    pub fn for_grid(grid: &GridState) -> Self {
        let len = grid.node_count() + 1;
        Self {
            alpha: vec![0.0; len],
            beta: vec![0.0; len],
        }
    }

    /// Advances `grid` by exactly one time step and returns the new field.
    pub fn step<'g>(&mut self, grid: &'g mut GridState) -> &'g [f64] {
        let nx = grid.node_count();
        let left = grid.left_temperature();
        let right = grid.right_temperature();
        let Coefficients {
            a,
            b,
            c,
            capacity_rate,
        } = grid.coefficients();

        self.alpha.resize(nx + 1, 0.0);
        self.beta.resize(nx + 1, 0.0);

        let field = grid.field_mut();

        self.alpha[0] = 0.0;
        self.beta[0] = left;
        for i in 1..nx {
            let source = -capacity_rate * field[i];
            let denom = b - c * self.alpha[i - 1];
            self.alpha[i] = a / denom;
            self.beta[i] = (c * self.beta[i - 1] - source) / denom;
        }

        field[0] = left;
        field[nx] = right;
        for i in (1..nx).rev() {
            field[i] = self.alpha[i] * field[i + 1] + self.beta[i];
        }

        grid.record_step();
        grid.temperatures()
    }

    /// Forward-sweep `alpha` coefficients from the latest step.
    #[must_use]
    pub fn alpha(&self) -> &[f64] {
        &self.alpha
    }

    /// Forward-sweep `beta` coefficients from the latest step.
    #[must_use]
    pub fn beta(&self) -> &[f64] {
        &self.beta
    }
}
