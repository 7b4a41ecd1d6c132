//! Capture agent facade: level filtering, buffering, periodic flush,
//! and the process-wide activation guard.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

use browserlog_protocol::constants::{CONSOLE_LEVELS, DEFAULT_PORT, FLUSH_INTERVAL};

use crate::buffer::{FlushBuffer, SendFn};
use crate::classify::{ConsoleArg, build_record};
use crate::transport::Transport;

/// Process-wide activation slot.
///
/// Multiple independently wired copies of the agent degrade to a single
/// active one: the first [`Forwarder::install`] claims the slot, later
/// calls see it taken and back off. The slot is never released — like
/// the page-level flag in the browser snippet, it lives until the
/// process (the "page load") ends.
static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Capture agent configuration.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Ingestion port on localhost.
    pub port: u16,
    /// Console levels eligible for forwarding. Filtering happens here,
    /// at capture time; the server accepts whatever arrives.
    pub levels: Vec<String>,
    /// Originating page location reported in each record.
    pub url: String,
    /// User agent string reported in each record.
    pub user_agent: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            levels: CONSOLE_LEVELS.iter().map(|s| (*s).to_string()).collect(),
            url: String::new(),
            user_agent: String::new(),
        }
    }
}

/// The capture agent.
///
/// Owns the flush buffer and a periodic flush ticker bounding
/// worst-case delivery latency. [`Forwarder::close`] is the page-unload
/// analog: it stops the ticker and flushes whatever is left,
/// fire-and-forget.
pub struct Forwarder {
    buffer: FlushBuffer,
    levels: Vec<String>,
    url: String,
    user_agent: String,
    ticker_cancel: CancellationToken,
}

impl Forwarder {
    /// Creates an agent delivering batches over HTTP to the configured
    /// port. Does not touch the activation slot; use
    /// [`Forwarder::install`] for guarded one-time activation.
    pub fn new(config: CaptureConfig) -> Self {
        let transport = Transport::new(config.port);
        Self::with_send_fn(config, transport.into_send_fn())
    }

    /// Creates an agent with a custom batch callback.
    pub fn with_send_fn(config: CaptureConfig, send_fn: SendFn) -> Self {
        let buffer = FlushBuffer::new(send_fn);
        let ticker_cancel = CancellationToken::new();

        let ticker_buffer = buffer.clone();
        let token = ticker_cancel.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(FLUSH_INTERVAL);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            ticker.tick().await; // Skip immediate tick.
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        ticker_buffer.flush().await;
                    }
                }
            }
        });

        Self {
            buffer,
            levels: config.levels,
            url: config.url,
            user_agent: config.user_agent,
            ticker_cancel,
        }
    }

    /// Claims the process-wide activation slot and creates the agent.
    ///
    /// Returns `None` when another copy already activated; the caller
    /// should simply not forward (the active copy handles everything).
    pub fn install(config: CaptureConfig) -> Option<Self> {
        if ACTIVE
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("capture agent already active, skipping activation");
            return None;
        }
        tracing::info!(port = config.port, "capture agent activated");
        Some(Self::new(config))
    }

    /// Captures one console call.
    ///
    /// Levels outside the configured set are dropped here. Never fails:
    /// forwarding is strictly additive to whatever the caller already
    /// did with the original console output.
    pub async fn log(&self, level: &str, args: &[ConsoleArg]) {
        if !self.levels.iter().any(|l| l == level) {
            return;
        }
        let record = build_record(level, args, &self.url, &self.user_agent);
        self.buffer.push(record).await;
    }

    /// Forces an immediate flush of buffered records.
    pub async fn flush(&self) {
        self.buffer.flush().await;
    }

    /// Page-unload analog: stops the periodic ticker and performs a
    /// final best-effort flush.
    pub async fn close(&self) {
        self.ticker_cancel.cancel();
        self.buffer.flush().await;
    }
}
