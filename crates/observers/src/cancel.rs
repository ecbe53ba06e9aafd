use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use rodheat_core::Observer;

use crate::traits::CanStopEarly;

/// Observer that stops a solver once any clone of it is cancelled.
///
/// Clones share one flag, so a UI or signal handler can keep a clone and
/// cancel a run that another thread is driving. The solver sees the request
/// at its next event, between steps or between sweep cells.
///
/// # Example
///
/// ```
/// use rodheat_observers::CancelToken;
/// use rodheat_rod::Parameters;
/// use rodheat_solvers::transient::implicit;
///
/// let token = CancelToken::new();
/// token.cancel();
///
/// let solution = implicit::solve(&Parameters::default(), token.clone())?;
/// assert_eq!(solution.status, implicit::Status::StoppedByObserver);
/// # Ok::<(), implicit::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that every observed solver stop at its next event.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for CancelToken {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_cancelled().then(A::stop_early)
    }
}
