//! Elapsed-time measurement around a unit of work.
//!
//! Uses `std::time::Instant`, which is monotonic; sub-millisecond precision
//! is best-effort via the platform clock.

use std::time::{Duration, Instant};

/// Run `action` to completion and return its value with the elapsed time.
///
/// Timestamps are taken immediately before and after the call. A panic in
/// `action` is not caught: it propagates and no duration is produced.
pub fn measure_duration<T>(action: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = action();
    (value, start.elapsed())
}
