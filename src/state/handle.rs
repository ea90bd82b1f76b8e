//! Read/write access to a state value regardless of where it lives.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

/// Untracked access to a shared state value.
pub trait StateHandle<T>: Clone + 'static {
    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> R;
    fn write_state(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> StateHandle<T> for RwSignal<T> {
    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_untracked(f)
    }

    fn write_state(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

impl<T: 'static> StateHandle<T> for Rc<RefCell<T>> {
    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn write_state(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}
