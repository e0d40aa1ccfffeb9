#![warn(missing_docs)]
//! Runguard Util - Standalone Helpers
//!
//! Small, dependency-free utilities that accompany the harness:
//! - String shaping for console columns (`StrExt`)
//! - Buffered stream copying with a configurable buffer
//! - Running aggregation (`Aggregator`, `DurationAverage`)
//! - Counted iteration and key-projection equality

mod average;
mod iter;
mod stream;
mod text;

pub use average::{Aggregator, DurationAverage};
pub use iter::{iterate, iterate_from, KeyComparer};
pub use stream::{copy_stream, copy_stream_with, DEFAULT_BUFFER_SIZE};
pub use text::StrExt;
