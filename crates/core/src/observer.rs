/// Receives events from a solver and optionally returns a control action.
///
/// Solvers emit an event of type `E` at well-defined points (after each time
/// step, after each sweep cell) and act on the returned `A`, if any.
/// Returning `None` lets the solver continue unchanged.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()`
/// is the observer that never acts.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<O: Observer<usize, Action>>(mut observer: O, events: usize) -> usize {
        for event in 0..events {
            if let Some(Action::Stop) = observer.observe(&event) {
                return event;
            }
        }
        events
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), 10);
    }

    #[test]
    fn closure_observer_can_act() {
        let stopped_at = drive(|event: &usize| (*event == 3).then_some(Action::Stop), 10);
        assert_eq!(stopped_at, 3);
    }

    #[test]
    fn closure_observer_can_capture_state() {
        let mut seen = Vec::new();
        drive(
            |event: &usize| {
                seen.push(*event);
                None
            },
            4,
        );
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
