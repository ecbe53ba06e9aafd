use rodheat_core::Observer;
use uom::si::f64::Time;

use crate::traits::{HasCenterTemperature, HasElapsed};

/// One recorded point of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub elapsed: Time,
    pub center_temperature: f64,
}

/// Observer that records the center temperature over simulated time.
///
/// This is the readout an animation shows: elapsed time and the temperature
/// at the center node. With [`every`](Self::every) only every n-th event is
/// kept, which bounds memory for fine time steps. It never stops a run.
#[derive(Debug, Clone)]
pub struct History {
    every: usize,
    seen: usize,
    samples: Vec<Sample>,
}

impl History {
    /// Records every event.
    #[must_use]
    pub fn new() -> Self {
        Self::every(1)
    }

    /// Records the first event and every `n`-th after it.
    ///
    /// An `n` of zero is treated as one.
    #[must_use]
    pub fn every(n: usize) -> Self {
        Self {
            every: n.max(1),
            seen: 0,
            samples: Vec::new(),
        }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasElapsed + HasCenterTemperature,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.seen % self.every == 0 {
            self.samples.push(Sample {
                elapsed: event.elapsed(),
                center_temperature: event.center_temperature(),
            });
        }
        self.seen += 1;
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the samples can be read after the run completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasElapsed + HasCenterTemperature,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
