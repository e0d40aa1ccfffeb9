//! Running aggregation.

use std::time::Duration;

/// A seeded fold that accumulates one value at a time.
#[derive(Debug, Clone)]
pub struct Aggregator<T, F>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    value: T,
    fold: F,
}

impl<T, F> Aggregator<T, F>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    /// Create an aggregator from a fold function and a seed value.
    pub fn new(fold: F, seed: T) -> Self {
        Self { value: seed, fold }
    }

    /// Fold `value` into the accumulator.
    pub fn add(&mut self, value: T) {
        self.value = (self.fold)(self.value.clone(), value);
    }

    /// The current accumulated value.
    pub fn current(&self) -> &T {
        &self.value
    }
}

/// Incremental running mean over durations.
///
/// Uses the update `mean += (sample - mean) / n` on integer nanoseconds,
/// so long series never overflow a running sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationAverage {
    mean_nanos: i128,
    count: u64,
}

impl DurationAverage {
    /// An empty average.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sample into the running mean.
    pub fn add(&mut self, sample: Duration) {
        self.count += 1;
        let delta = sample.as_nanos() as i128 - self.mean_nanos;
        self.mean_nanos += delta / self.count as i128;
    }

    /// The running mean; zero while no samples have been added.
    pub fn mean(&self) -> Duration {
        Duration::from_nanos(self.mean_nanos.max(0) as u64)
    }

    /// Number of samples folded in so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}
