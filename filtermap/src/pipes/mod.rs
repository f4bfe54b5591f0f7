use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

mod combinators;
#[cfg(test)]
mod tests;

pub use combinators::{filter, filter_map, map};

/// A sink that accepts values one at a time.
pub struct Pipe<'a, T>(Box<dyn Fn(T) + 'a>);

impl<'a, T> Pipe<'a, T> {
    pub fn new<F: Fn(T) + 'a>(fun: F) -> Self {
        Self(Box::new(fun))
    }

    pub fn dropping() -> Self {
        Self::new(|_| {})
    }

    pub fn push(&self, data: T) {
        (self.0)(data)
    }

    /// Pushes every item of `items`, front to back.
    pub fn feed<I: IntoIterator<Item = T>>(&self, items: I) {
        items.into_iter().for_each(|t| self.push(t));
    }
}

/// Values gathered by the pipe returned from [`collector`].
pub struct Collected<T>(Rc<RefCell<Vec<T>>>);

impl<T> Collected<T> {
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Moves the values gathered so far out, leaving the collection empty.
    pub fn take(&self) -> Vec<T> {
        self.0.replace(Vec::new())
    }
}

pub fn collector<'a, T: 'a>() -> (Pipe<'a, T>, Collected<T>) {
    let store = Rc::new(RefCell::new(Vec::new()));
    let c = store.clone();
    debug!("Creating collector");
    let pipe = Pipe::new(move |t| c.borrow_mut().push(t));
    (pipe, Collected(store))
}
