#![warn(missing_docs)]
//! # Runguard
//!
//! Run top-level units of work with failure reporting, duration display,
//! and redirectable console I/O.
//!
//! Runguard turns "any uncaught failure crashes the process" into "any
//! failure is reported and the program continues cleanly":
//! - **Failure absorption**: panics and `Err` returns from the wrapped
//!   work are captured as [`Fault`]s and rendered, never rethrown
//! - **Duration display**: successful runs report their elapsed time,
//!   scaled to a readable unit
//! - **Redirectable I/O**: every line flows through a [`Console`] whose
//!   writer and reader ports are plain closures; tests capture output by
//!   registering one
//! - **Sync and async**: suspend-capable entry points for async callers,
//!   plus a blocking bridge for synchronous `main` functions
//! - **Pause-at-end**: optional "Press \<enter\> to continue..." prompt
//!   before returning
//!
//! ## Quick Start
//!
//! ```no_run
//! use runguard::prelude::*;
//!
//! fn main() {
//!     let mut harness = Harness::new();
//!     harness.run(|| {
//!         // program logic; panics end up reported, not unwound
//!     }).unwrap();
//! }
//! ```
//!
//! ## Capturing output in tests
//!
//! ```
//! use runguard::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let log = Arc::new(Mutex::new(String::new()));
//! let sink = Arc::clone(&log);
//!
//! let mut harness = Harness::new();
//! harness.console_mut().register_writer(
//!     Some(Box::new(move |text: &str| sink.lock().unwrap().push_str(text))),
//!     true,
//! );
//! harness.run(|| panic!("boom")).unwrap();
//!
//! assert!(log.lock().unwrap().contains("boom"));
//! ```

pub use runguard_core::{
    measure_duration, normalize_duration, write_fault, write_fault_with_message, Console,
    ConsoleError, ConsoleReader, ConsoleWriter, Fault, Harness, RunOptions, NEWLINE,
};

pub use runguard_util::{
    copy_stream, copy_stream_with, iterate, iterate_from, Aggregator, DurationAverage,
    KeyComparer, StrExt, DEFAULT_BUFFER_SIZE,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Console, Fault, Harness, RunOptions, StrExt};
}
