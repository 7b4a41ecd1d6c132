//! Flush buffer with three independent triggers feeding one flush.
//!
//! Records accumulate in order until a size threshold flushes inline,
//! a scheduled one-shot fires shortly after the first buffered entry,
//! or the owner forces a flush (periodic tick, shutdown). Snapshot and
//! clear happen under the buffer lock, so a flush can never race a
//! concurrent append or another flush.

use std::sync::Arc;

use browserlog_protocol::constants::{FLUSH_DELAY, FLUSH_THRESHOLD};
use browserlog_protocol::{LogBatch, LogRecord};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Callback invoked with each flushed batch.
pub type SendFn = Box<dyn Fn(LogBatch) + Send + Sync + 'static>;

/// In-memory record buffer shared between triggers.
#[derive(Clone)]
pub struct FlushBuffer {
    inner: Arc<Mutex<BufferState>>,
}

struct BufferState {
    records: Vec<LogRecord>,
    /// Cancels the pending scheduled flush, if one is in flight.
    scheduled: Option<CancellationToken>,
    send_fn: SendFn,
}

impl FlushBuffer {
    /// Creates an empty buffer delivering batches to `send_fn`.
    pub fn new(send_fn: SendFn) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BufferState {
                records: Vec::new(),
                scheduled: None,
                send_fn,
            })),
        }
    }

    /// Appends one record.
    ///
    /// Reaching the size threshold flushes immediately; otherwise a
    /// single delayed flush is scheduled if none is pending.
    pub async fn push(&self, record: LogRecord) {
        let mut state = self.inner.lock().await;
        state.records.push(record);

        if state.records.len() >= FLUSH_THRESHOLD {
            flush_locked(&mut state);
        } else if state.scheduled.is_none() {
            let token = CancellationToken::new();
            state.scheduled = Some(token.clone());

            let inner = Arc::clone(&self.inner);
            tokio::spawn(async move {
                tokio::select! {
                    _ = token.cancelled() => {}
                    _ = tokio::time::sleep(FLUSH_DELAY) => {
                        flush_inner(&inner).await;
                    }
                }
            });
        }
    }

    /// Snapshots the buffer, clears it, cancels any pending scheduled
    /// flush, and delivers the snapshot as one batch. No-op when empty.
    pub async fn flush(&self) {
        flush_inner(&self.inner).await;
    }

    /// Number of buffered records (not yet flushed).
    pub async fn len(&self) -> usize {
        self.inner.lock().await.records.len()
    }

    /// `true` when nothing is buffered.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

async fn flush_inner(inner: &Arc<Mutex<BufferState>>) {
    let mut state = inner.lock().await;
    flush_locked(&mut state);
}

fn flush_locked(state: &mut BufferState) {
    if let Some(token) = state.scheduled.take() {
        token.cancel();
    }
    if state.records.is_empty() {
        return;
    }
    let batch = LogBatch {
        logs: std::mem::take(&mut state.records),
    };
    (state.send_fn)(batch);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    fn make_record(message: &str) -> LogRecord {
        LogRecord {
            level: "log".into(),
            message: message.into(),
            timestamp: "2026-08-23T10:15:30Z".into(),
            url: String::new(),
            user_agent: String::new(),
            stacks: vec![],
            extra: vec![],
        }
    }

    /// Recording send fn plus the buffer wired to it.
    fn recording_buffer() -> (FlushBuffer, Arc<StdMutex<Vec<LogBatch>>>) {
        let batches = Arc::new(StdMutex::new(Vec::new()));
        let sink = Arc::clone(&batches);
        let buffer = FlushBuffer::new(Box::new(move |batch| {
            sink.lock().unwrap().push(batch);
        }));
        (buffer, batches)
    }

    #[tokio::test]
    async fn explicit_flush_delivers_in_order() {
        let (buffer, batches) = recording_buffer();

        buffer.push(make_record("first")).await;
        buffer.push(make_record("second")).await;
        buffer.flush().await;

        let batches = batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        let messages: Vec<&str> = batches[0].logs.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn flush_on_empty_sends_nothing() {
        let (buffer, batches) = recording_buffer();
        buffer.flush().await;
        assert!(batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn threshold_flushes_immediately() {
        let (buffer, batches) = recording_buffer();

        for i in 0..FLUSH_THRESHOLD {
            buffer.push(make_record(&format!("msg {i}"))).await;
        }

        // No waiting: the 50th push flushed inline.
        let batches = batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].logs.len(), FLUSH_THRESHOLD);
    }

    #[tokio::test]
    async fn scheduled_flush_fires_after_delay() {
        let (buffer, batches) = recording_buffer();

        buffer.push(make_record("delayed")).await;
        assert!(batches.lock().unwrap().is_empty());

        tokio::time::sleep(FLUSH_DELAY + Duration::from_millis(50)).await;

        let batches = batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].logs[0].message, "delayed");
    }

    #[tokio::test]
    async fn one_scheduled_flush_for_many_pushes() {
        let (buffer, batches) = recording_buffer();

        for i in 0..5 {
            buffer.push(make_record(&format!("msg {i}"))).await;
        }
        tokio::time::sleep(FLUSH_DELAY + Duration::from_millis(50)).await;

        // All five arrive as a single batch, not five.
        let batches = batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].logs.len(), 5);
    }

    #[tokio::test]
    async fn explicit_flush_cancels_scheduled_one() {
        let (buffer, batches) = recording_buffer();

        buffer.push(make_record("only once")).await;
        buffer.flush().await;

        tokio::time::sleep(FLUSH_DELAY + Duration::from_millis(50)).await;

        // The scheduled flush was cancelled, so exactly one delivery.
        assert_eq!(batches.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn buffer_clears_after_flush() {
        let (buffer, _) = recording_buffer();
        buffer.push(make_record("a")).await;
        assert_eq!(buffer.len().await, 1);

        buffer.flush().await;
        assert!(buffer.is_empty().await);
    }

    #[tokio::test]
    async fn pushes_after_flush_start_a_new_batch() {
        let (buffer, batches) = recording_buffer();

        buffer.push(make_record("first")).await;
        buffer.flush().await;
        buffer.push(make_record("second")).await;
        buffer.flush().await;

        let batches = batches.lock().unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].logs[0].message, "first");
        assert_eq!(batches[1].logs[0].message, "second");
    }
}
