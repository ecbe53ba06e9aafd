use uom::si::f64::Time;

/// Event emitted by the implicit solver for each state of the field.
///
/// Step 0 is the initial field before any integration.
/// Steps 1..N are emitted after each time step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number (0 for initial, 1..N for time steps).
    pub step: usize,

    /// Simulated time at this step.
    pub elapsed: Time,

    /// Temperatures at every node, indexed `0..=Nx`.
    pub field: &'a [f64],

    /// Index of the center node, `Nx / 2`.
    pub center_index: usize,
}

impl Event<'_> {
    /// Temperature at the center node.
    #[must_use]
    pub fn center_temperature(&self) -> f64 {
        self.field[self.center_index]
    }
}
