//! Standalone ingestion server.
//!
//! Build-tool adapters normally own the server lifecycle; this binary
//! runs the same server by hand for setups without an adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use browserlog_protocol::constants::{DEFAULT_LOG_FILE, DEFAULT_PORT};
use browserlog_server::{LogServer, ServerConfig, ServerError};

#[derive(Parser)]
#[command(name = "browserlog-server", about = "Forward browser console logs to a local log file")]
struct Args {
    /// Ingestion port.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log file path.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let server = LogServer::new(ServerConfig {
        port: args.port,
        log_file: args.log_file,
    });
    server.start().await?;

    tokio::signal::ctrl_c().await?;
    server.stop().await;
    Ok(())
}
