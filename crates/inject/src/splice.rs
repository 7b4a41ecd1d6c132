//! Marker-guarded splicing of the capture snippet into script assets.

use std::fs;
use std::path::Path;

use crate::snippet::{INJECTION_MARKER, generate};

/// Errors from file-based injection.
#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Prepends the snippet to an asset's source.
///
/// Returns `None` when the source already carries the injection marker,
/// so splicing the same asset twice is a no-op. The marker is the
/// snippet's own first statement, which makes the check self-sustaining
/// across rebuilds.
pub fn inject(source: &str, snippet: &str) -> Option<String> {
    if source.contains(INJECTION_MARKER) {
        return None;
    }
    let mut patched = String::with_capacity(snippet.len() + source.len() + 1);
    patched.push_str(snippet);
    if !snippet.ends_with('\n') {
        patched.push('\n');
    }
    patched.push_str(source);
    Some(patched)
}

/// Splices the snippet for `port` into the script file at `path`.
///
/// Returns `true` if the file was modified, `false` if it already
/// contained the marker.
pub fn inject_file(path: &Path, port: u16) -> Result<bool, InjectError> {
    let source = fs::read_to_string(path)?;
    match inject(&source, &generate(port)) {
        Some(patched) => {
            fs::write(path, patched)?;
            tracing::debug!(path = %path.display(), port, "capture agent spliced");
            Ok(true)
        }
        None => {
            tracing::debug!(path = %path.display(), "capture agent already present");
            Ok(false)
        }
    }
}
