use rodheat_rod::GridState;
use uom::si::f64::Time;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of running a rod through simulated time.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Final temperatures at every node, indexed `0..=Nx`.
    pub field: Vec<f64>,

    /// Temperature at node `Nx / 2`.
    pub center_temperature: f64,

    /// Number of time steps completed.
    pub steps: usize,

    /// Simulated time covered.
    pub elapsed: Time,
}

impl Solution {
    pub(super) fn from_grid(grid: GridState, status: Status) -> Self {
        let center_temperature = grid.center_temperature();
        let steps = grid.steps_taken();
        let elapsed = grid.elapsed();
        Self {
            status,
            field: grid.into_temperatures(),
            center_temperature,
            steps,
            elapsed,
        }
    }
}
