use std::cell::RefCell;

/// Where a screen keeps its view state between awaits.
///
/// Workflows never hold a borrow across an await; every access is one short
/// closure. `None` means the owning screen is gone and the write was dropped.
pub trait StateCell<S> {
    fn update<T>(&self, f: impl FnOnce(&mut S) -> T) -> Option<T>;

    fn read<T>(&self, f: impl FnOnce(&S) -> T) -> Option<T>;
}

impl<S> StateCell<S> for RefCell<S> {
    fn update<T>(&self, f: impl FnOnce(&mut S) -> T) -> Option<T> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }

    fn read<T>(&self, f: impl FnOnce(&S) -> T) -> Option<T> {
        self.try_borrow().ok().map(|state| f(&state))
    }
}
