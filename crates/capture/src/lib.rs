//! Native console capture agent.
//!
//! Implements the same serialization and batching protocol as the
//! generated browser snippet, for Rust-hosted page contexts (embedded
//! webviews, test harnesses). Console-style calls are classified into
//! structured records, accumulated in a bounded buffer, and shipped to
//! the local log server — fire-and-forget, so instrumentation can never
//! break the instrumented application.

mod buffer;
mod classify;
mod forwarder;
mod transport;

pub use buffer::{FlushBuffer, SendFn};
pub use classify::{ConsoleArg, build_record};
pub use forwarder::{CaptureConfig, Forwarder};
pub use transport::Transport;
