use std::iter::FromIterator;
use std::ops::Index;

/// An owned, ordered sequence with chainable `filter` and `map`.
///
/// Every step returns a new `Sequence`; the receiver is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence<T>(Vec<T>);

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn map<U, M: Fn(&T) -> U>(&self, transform: M) -> Sequence<U> {
        Sequence(crate::map(&self.0, transform))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Clone> Sequence<T> {
    pub fn filter<P: Fn(&T) -> bool>(&self, predicate: P) -> Sequence<T> {
        Sequence(crate::filter(&self.0, predicate))
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'s, T> IntoIterator for &'s Sequence<T> {
    type Item = &'s T;
    type IntoIter = std::slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}
