use serde::{Deserialize, Serialize};

/// A single console log record captured in the browser.
///
/// Produced by the capture agent at console-call time, consumed once by
/// the ingestion endpoint, and discarded after formatting. There is no
/// deduplication and no persistence of the structured form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Console method name (`log`, `warn`, `error`, `info`, `debug`).
    ///
    /// Enforced against the configured forwarding levels at capture time;
    /// the server does not re-validate it.
    pub level: String,
    /// Call arguments rendered to readable text, joined by single spaces.
    pub message: String,
    /// Capture-time marker in RFC 3339 form.
    pub timestamp: String,
    /// Originating page location at capture time.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Browser user agent; transmitted for future use, never formatted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
    /// Raw stack-trace text blocks, each possibly multi-line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stacks: Vec<String>,
    /// Structured arguments that could not be flattened into `message`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<serde_json::Value>,
}

/// An ordered batch of log records. The capture agent never sends an
/// empty batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogBatch {
    pub logs: Vec<LogRecord>,
}

/// Success response body for a processed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestResponse {
    pub success: bool,
}

/// Error response body (`400 Invalid JSON`, `404 Not found`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
