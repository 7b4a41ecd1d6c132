use std::time::Duration;

/// Default ingestion port.
pub const DEFAULT_PORT: u16 = 9999;

/// Default log file path, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "dev.log";

/// The single ingestion route. Anything else is 404.
pub const INGEST_PATH: &str = "/api/debug/client-logs";

/// Buffer size at which the capture agent flushes immediately.
pub const FLUSH_THRESHOLD: usize = 50;

/// Delay before a scheduled flush fires after the first buffered entry.
pub const FLUSH_DELAY: Duration = Duration::from_millis(100);

/// Unconditional flush period bounding worst-case delivery latency.
pub const FLUSH_INTERVAL: Duration = Duration::from_secs(10);

/// Maximum accepted request body size (2 MiB).
///
/// A full batch is 50 records; anything near this bound is a
/// misbehaving client, not a log batch.
pub const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Console methods eligible for interception, in patch order.
pub const CONSOLE_LEVELS: [&str; 5] = ["log", "warn", "error", "info", "debug"];

/// Returns `true` if `level` names a known console method.
pub fn is_console_level(level: &str) -> bool {
    CONSOLE_LEVELS.contains(&level)
}

/// Builds the ingestion URL the capture agent posts batches to.
pub fn ingest_url(port: u16) -> String {
    format!("http://localhost:{port}{INGEST_PATH}")
}
