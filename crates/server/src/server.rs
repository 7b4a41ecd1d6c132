//! Log server lifecycle: Stopped -> Listening -> Stopped.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use browserlog_protocol::constants::{DEFAULT_LOG_FILE, DEFAULT_PORT};

use crate::ServerError;
use crate::routes;
use crate::sink::LogSink;

/// Server configuration. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on (0 = OS-assigned, useful in tests).
    pub port: u16,
    /// Path of the append-only log file.
    pub log_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// The ingestion HTTP server.
///
/// Owns one listening socket at a time. The accept loop runs on a
/// spawned background task, so an open listener never keeps the host
/// process alive once everything else is done.
pub struct LogServer {
    config: ServerConfig,
    inner: Mutex<Option<Running>>,
}

struct Running {
    cancel: CancellationToken,
    local_addr: SocketAddr,
}

impl LogServer {
    /// Creates a stopped server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(None),
        }
    }

    /// Creates a stopped server with the default port and log file.
    pub fn with_defaults() -> Self {
        Self::new(ServerConfig::default())
    }

    /// Binds the socket and starts serving in the background.
    ///
    /// Idempotent: calling `start` while listening is a no-op, the
    /// existing socket is kept.
    pub async fn start(&self) -> Result<(), ServerError> {
        let mut inner = self.inner.lock().await;
        if inner.is_some() {
            tracing::debug!("log server already listening");
            return Ok(());
        }

        let addr: SocketAddr = ([127, 0, 0, 1], self.config.port).into();
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;

        let sink = Arc::new(LogSink::new(self.config.log_file.clone()));
        let app = routes::router(sink);

        let cancel = CancellationToken::new();
        let shutdown = cancel.clone().cancelled_owned();
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await
            {
                tracing::error!("log server error: {e}");
            }
        });

        tracing::info!(
            log_file = %self.config.log_file.display(),
            "log server listening on {local_addr}"
        );
        *inner = Some(Running { cancel, local_addr });
        Ok(())
    }

    /// Closes the listening socket.
    ///
    /// Calling `stop` on a stopped (or never-started) server is a no-op,
    /// never an error.
    pub async fn stop(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(running) = inner.take() {
            running.cancel.cancel();
            tracing::info!("log server stopped");
        }
    }

    /// Returns `true` while the server is listening.
    pub async fn is_listening(&self) -> bool {
        self.inner.lock().await.is_some()
    }

    /// The bound address, once listening.
    pub async fn local_addr(&self) -> Option<SocketAddr> {
        self.inner.lock().await.as_ref().map(|r| r.local_addr)
    }

    /// The listening port (0 if not listening).
    pub async fn port(&self) -> u16 {
        self.local_addr().await.map(|a| a.port()).unwrap_or(0)
    }
}
