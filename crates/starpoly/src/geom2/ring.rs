//! Fixed-size cyclic sequence.
//!
//! Every per-vertex and per-edge quantity of a polygon lives in a `Ring`.
//! Index arithmetic wraps modulo `len()`; the index helpers panic on an empty
//! ring, so callers check `is_empty()` first.

use std::ops::Index;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ring<T> {
    items: Vec<T>,
}

impl<T> Ring<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn next(&self, i: usize) -> usize {
        self.forward(i, 1)
    }

    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        self.backward(i, 1)
    }

    /// Index `k` steps after `i`.
    #[inline]
    pub fn forward(&self, i: usize, k: usize) -> usize {
        (i % self.len() + k % self.len()) % self.len()
    }

    /// Index `k` steps before `i`.
    #[inline]
    pub fn backward(&self, i: usize, k: usize) -> usize {
        let n = self.len();
        (i % n + n - k % n) % n
    }

    /// All `len()` indices starting at `start`, ascending with wraparound.
    pub fn walk_forward(&self, start: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).map(move |k| self.forward(start, k))
    }

    /// All `len()` indices starting at `start`, descending with wraparound.
    pub fn walk_backward(&self, start: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).map(move |k| self.backward(start, k))
    }

    /// Consecutive pairs `(items[i], items[i+1 mod n])` for `i` in `0..n`.
    pub fn pairs(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        (0..self.len()).map(move |i| (&self.items[i], &self.items[self.next(i)]))
    }
}

impl<T> Index<usize> for Ring<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.items[i % self.items.len()]
    }
}

impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Ring<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}
