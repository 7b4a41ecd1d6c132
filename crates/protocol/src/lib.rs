//! Wire protocol types shared by the capture agent and the log server.
//!
//! The only externally visible protocol is a single HTTP endpoint:
//! `POST /api/debug/client-logs` carrying a JSON [`LogBatch`]. Everything
//! here is plain data; formatting and buffering live in the server and
//! capture crates.

pub mod constants;
pub mod record;

// Re-export primary types for convenience.
pub use record::{ErrorResponse, IngestResponse, LogBatch, LogRecord};
