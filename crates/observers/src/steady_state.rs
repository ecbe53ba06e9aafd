use rodheat_core::Observer;

use crate::traits::{CanStopEarly, HasField};

/// Observer that stops a run once the field has stopped changing.
///
/// After each event the largest per-node change since the previous event is
/// compared with `tolerance`; the run stops at the first event where every
/// node moved by less. The tolerance is in temperature units per step, so it
/// should shrink with the time step.
#[derive(Debug, Clone)]
pub struct SteadyState {
    tolerance: f64,
    previous: Vec<f64>,
    last_change: Option<f64>,
}

impl SteadyState {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            previous: Vec::new(),
            last_change: None,
        }
    }

    /// Largest per-node change between the two most recent events.
    #[must_use]
    pub fn last_change(&self) -> Option<f64> {
        self.last_change
    }
}

impl<E: HasField, A: CanStopEarly> Observer<E, A> for SteadyState {
    fn observe(&mut self, event: &E) -> Option<A> {
        let field = event.field();

        self.last_change = (self.previous.len() == field.len()).then(|| {
            field
                .iter()
                .zip(&self.previous)
                .map(|(new, old)| (new - old).abs())
                .fold(0.0, f64::max)
        });

        self.previous.clear();
        self.previous.extend_from_slice(field);

        match self.last_change {
            Some(change) if change < self.tolerance => Some(A::stop_early()),
            _ => None,
        }
    }
}

/// Allows `&mut SteadyState` to be passed to solvers that take an observer by
/// value, so the last change can be read after the run completes.
impl<E: HasField, A: CanStopEarly> Observer<E, A> for &mut SteadyState {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
