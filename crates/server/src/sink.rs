//! Append-only log file sink.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Owns the log file path and appends formatted lines to it.
///
/// The file is opened in true append mode on every call, so concurrent
/// request handlers append position-independently and never clobber
/// each other. The sink creates the file if absent and never truncates.
#[derive(Debug)]
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    /// Creates a sink for the given path. The file is not touched until
    /// the first append.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one formatted record (plus trailing newline).
    ///
    /// One call per record: a crash mid-batch leaves a durable prefix of
    /// the batch on disk.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")
    }
}
