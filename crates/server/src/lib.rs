//! Local HTTP server that turns forwarded browser console logs into
//! terminal output and an append-only log file.
//!
//! A single route, `POST /api/debug/client-logs`, accepts JSON batches
//! of [`browserlog_protocol::LogRecord`], formats each record, appends
//! it to the configured log file, and mirrors it to stdout. The server
//! runs on a background task and never keeps the host process alive.

mod format;
mod routes;
mod server;
mod sink;

pub use format::format_record;
pub use routes::router;
pub use server::{LogServer, ServerConfig};
pub use sink::LogSink;

/// Errors produced by the log server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
