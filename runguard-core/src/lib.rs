#![warn(missing_docs)]
//! Runguard Core - Execution Harness
//!
//! This crate provides the runtime pieces of the runguard harness:
//! - `Console` with replaceable output/input ports (closures work directly)
//! - `Harness` entry points for sync, fallible, async, and blocking-bridge runs
//! - `Fault` capture from panics, error chains, and `anyhow` chains
//! - Block-formatted failure reporting with inner-cause traversal
//! - Wall-clock duration metering and unit-scaled formatting
//!
//! Failures raised by the wrapped work never escape the harness; they are
//! rendered through the console's output port and the program continues to
//! the optional pause step.

mod console;
mod fault;
mod format;
mod harness;
mod measure;
mod report;

pub use console::{Console, ConsoleError, ConsoleReader, ConsoleWriter, NEWLINE};
pub use fault::Fault;
pub use format::normalize_duration;
pub use harness::{Harness, RunOptions};
pub use measure::measure_duration;
pub use report::{write_fault, write_fault_with_message};
