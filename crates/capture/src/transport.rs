//! Fire-and-forget batch delivery to the ingestion endpoint.

use std::time::Duration;

use browserlog_protocol::LogBatch;
use browserlog_protocol::constants::ingest_url;

use crate::buffer::SendFn;

/// Per-request timeout; a hung server must not pile up sends forever.
const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client pinned to one ingestion URL.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
    endpoint: String,
}

impl Transport {
    /// Creates a transport targeting `http://localhost:<port>/api/debug/client-logs`.
    pub fn new(port: u16) -> Self {
        Self::with_endpoint(ingest_url(port))
    }

    /// Creates a transport targeting an explicit endpoint URL.
    pub fn with_endpoint(endpoint: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, endpoint }
    }

    /// Dispatches one batch, discarding the outcome.
    ///
    /// The send runs on a spawned task and its result is explicitly
    /// dropped: no retry, no error surfaced to the caller. A lost batch
    /// is an accepted cost; breaking the instrumented application is
    /// not. Must be called from within a tokio runtime.
    pub fn dispatch(&self, batch: LogBatch) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        tokio::spawn(async move {
            let _ = client.post(&endpoint).json(&batch).send().await;
        });
    }

    /// Wraps this transport as a buffer send callback.
    pub fn into_send_fn(self) -> SendFn {
        Box::new(move |batch| self.dispatch(batch))
    }
}
