use dioxus::prelude::*;
use services::StateCell;

/// Screen state held in a component signal.
///
/// Once the owning component unmounts the signal is dropped and every access
/// reports a detached screen.
pub struct SignalCell<S: 'static>(Signal<S>);

impl<S: 'static> SignalCell<S> {
    #[must_use]
    pub fn new(signal: Signal<S>) -> Self {
        Self(signal)
    }
}

impl<S: 'static> StateCell<S> for SignalCell<S> {
    fn update<T>(&self, f: impl FnOnce(&mut S) -> T) -> Option<T> {
        let mut signal = self.0;
        signal.try_write().ok().map(|mut state| f(&mut *state))
    }

    fn read<T>(&self, f: impl FnOnce(&S) -> T) -> Option<T> {
        self.0.try_read().ok().map(|state| f(&*state))
    }
}
