//! Iteration and key-equality helpers.

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Run `action` exactly `iterations` times with the zero-based index.
pub fn iterate(iterations: usize, action: impl FnMut(usize)) {
    iterate_from(0, iterations, action);
}

/// Run `action` exactly `iterations` times, indices starting at `start`.
pub fn iterate_from(start: usize, iterations: usize, mut action: impl FnMut(usize)) {
    for index in start..start + iterations {
        action(index);
    }
}

/// Equality and hashing of values through a key projection.
///
/// Compares two values by the key a closure extracts from each, for use
/// with `dedup_by`, sorting, or hand-rolled hash buckets.
pub struct KeyComparer<T, K, F>
where
    F: Fn(&T) -> K,
{
    key: F,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T, K, F> KeyComparer<T, K, F>
where
    K: PartialEq + Hash,
    F: Fn(&T) -> K,
{
    /// Create a comparer from a key projection.
    pub fn new(key: F) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// Whether `a` and `b` project to equal keys.
    pub fn eq(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }

    /// Hash the projected key of `value` into `state`.
    pub fn hash_key<H: Hasher>(&self, value: &T, state: &mut H) {
        (self.key)(value).hash(state);
    }
}
