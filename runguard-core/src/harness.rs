//! The execution harness.
//!
//! Wraps a top-level unit of work so that any failure it raises, whether a
//! panic or an `Err`, is captured and reported through the console instead
//! of unwinding out of the program. On success the elapsed time can be
//! reported; either way an optional pause-for-enter step runs last.
//!
//! Order is fixed: measure, then report, then pause. Nothing raised by the
//! wrapped work escapes; only errors from the reporting I/O path do.

use std::error::Error;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::console::{Console, ConsoleError};
use crate::fault::Fault;
use crate::format::normalize_duration;
use crate::measure::measure_duration;
use crate::report;

/// Flags controlling the wrap-up steps of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Prompt and wait for one line of input after the run (default false).
    pub pause_at_end: bool,
    /// Emit `"Finished in …"` after a successful run (default true).
    pub show_duration: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            pause_at_end: false,
            show_duration: true,
        }
    }
}

/// Runs units of work against an owned [`Console`].
///
/// Construct one per program (or per test) and feed it closures or
/// futures; failures are absorbed and written through the console's
/// output port.
///
/// ```no_run
/// use runguard_core::Harness;
///
/// let mut harness = Harness::new();
/// harness.run(|| {
///     // top-level program logic
/// }).unwrap();
/// ```
pub struct Harness {
    console: Console,
    // Lazily built for run_blocking outside any runtime, reused across runs.
    runtime: Option<tokio::runtime::Runtime>,
}

impl Harness {
    /// A harness over the standard console streams.
    pub fn new() -> Self {
        Self::with_console(Console::new())
    }

    /// A harness over an injected console (capturing ports, test doubles).
    pub fn with_console(console: Console) -> Self {
        Self {
            console,
            runtime: None,
        }
    }

    /// The console this harness writes and reads through.
    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    /// Give the console back, dropping the harness.
    pub fn into_console(self) -> Console {
        self.console
    }

    /// Run `action` with default options: no pause, duration shown.
    pub fn run(&mut self, action: impl FnOnce()) -> Result<(), ConsoleError> {
        self.run_with(RunOptions::default(), action)
    }

    /// Run `action`, absorbing any panic it raises.
    pub fn run_with(
        &mut self,
        options: RunOptions,
        action: impl FnOnce(),
    ) -> Result<(), ConsoleError> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| measure_duration(action)));
        let outcome = match outcome {
            Ok(((), duration)) => Ok(duration),
            Err(payload) => Err(Fault::from_panic(payload)),
        };
        self.finish(options, outcome)
    }

    /// Run a fallible `action`, absorbing a panic or an `Err` return.
    ///
    /// The success value is discarded; the harness is a terminal boundary.
    pub fn run_fallible<T, E>(
        &mut self,
        options: RunOptions,
        action: impl FnOnce() -> Result<T, E>,
    ) -> Result<(), ConsoleError>
    where
        E: Error,
    {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| measure_duration(action)));
        let outcome = match outcome {
            Ok((Ok(_), duration)) => Ok(duration),
            Ok((Err(err), _)) => Err(Fault::from_error(&err)),
            Err(payload) => Err(Fault::from_panic(payload)),
        };
        self.finish(options, outcome)
    }

    /// Run a future to completion, absorbing any panic it raises.
    ///
    /// This is the suspend-capable entry point: call it from async code and
    /// the harness awaits the work in place. Synchronous callers use
    /// [`run_blocking`](Self::run_blocking) instead.
    pub async fn run_async<Fut>(
        &mut self,
        options: RunOptions,
        action: Fut,
    ) -> Result<(), ConsoleError>
    where
        Fut: Future<Output = ()>,
    {
        let start = Instant::now();
        let outcome = match AssertUnwindSafe(action).catch_unwind().await {
            Ok(()) => Ok(start.elapsed()),
            Err(payload) => Err(Fault::from_panic(payload)),
        };
        self.finish(options, outcome)
    }

    /// Run a fallible future to completion, absorbing a panic or an `Err`.
    pub async fn run_async_fallible<T, E, Fut>(
        &mut self,
        options: RunOptions,
        action: Fut,
    ) -> Result<(), ConsoleError>
    where
        E: Error,
        Fut: Future<Output = Result<T, E>>,
    {
        let start = Instant::now();
        let outcome = match AssertUnwindSafe(action).catch_unwind().await {
            Ok(Ok(_)) => Ok(start.elapsed()),
            Ok(Err(err)) => Err(Fault::from_error(&err)),
            Err(payload) => Err(Fault::from_panic(payload)),
        };
        self.finish(options, outcome)
    }

    /// Run a future to completion while blocking the calling thread.
    ///
    /// Inside a runtime this uses `block_in_place`, which requires the
    /// multi-thread flavor; outside one, the future runs on a cached
    /// current-thread runtime owned by the harness. Deferred failures
    /// surface as the raw panic payload, never wrapped.
    pub fn run_blocking<Fut>(&mut self, options: RunOptions, action: Fut) -> Result<(), ConsoleError>
    where
        Fut: Future<Output = ()>,
    {
        let outcome = match self.block_on_measured(action) {
            Ok(((), duration)) => Ok(duration),
            Err(payload) => Err(Fault::from_panic(payload)),
        };
        self.finish(options, outcome)
    }

    /// Blocking variant of [`run_async_fallible`](Self::run_async_fallible).
    pub fn run_blocking_fallible<T, E, Fut>(
        &mut self,
        options: RunOptions,
        action: Fut,
    ) -> Result<(), ConsoleError>
    where
        E: Error,
        Fut: Future<Output = Result<T, E>>,
    {
        let outcome = match self.block_on_measured(action) {
            Ok((Ok(_), duration)) => Ok(duration),
            Ok((Err(err), _)) => Err(Fault::from_error(&err)),
            Err(payload) => Err(Fault::from_panic(payload)),
        };
        self.finish(options, outcome)
    }

    /// Drive `action` to completion on the current thread, measuring it and
    /// containing panics.
    fn block_on_measured<Out, Fut>(&mut self, action: Fut) -> std::thread::Result<(Out, Duration)>
    where
        Fut: Future<Output = Out>,
    {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => tokio::task::block_in_place(|| {
                panic::catch_unwind(AssertUnwindSafe(|| {
                    measure_duration(|| handle.block_on(action))
                }))
            }),
            Err(_) => {
                let runtime = self.runtime.get_or_insert_with(|| {
                    tokio::runtime::Builder::new_current_thread()
                        .enable_all()
                        .build()
                        .expect("Failed to create tokio runtime")
                });
                panic::catch_unwind(AssertUnwindSafe(|| {
                    measure_duration(|| runtime.block_on(action))
                }))
            }
        }
    }

    /// Shared wrap-up: duration line or failure report, then the optional
    /// pause. Runs in that order for every entry point.
    fn finish(
        &mut self,
        options: RunOptions,
        outcome: Result<Duration, Fault>,
    ) -> Result<(), ConsoleError> {
        match outcome {
            Ok(duration) if options.show_duration => {
                self.console
                    .write(&format!("Finished in {}.", normalize_duration(duration)))?;
            }
            Ok(_) => {}
            Err(fault) => report::write_fault(&mut self.console, &fault)?,
        }

        if options.pause_at_end {
            self.console.write("Press <enter> to continue...")?;
            self.console.read_line()?;
        }

        Ok(())
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
