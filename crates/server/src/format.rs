//! Formats one log record into display-ready text lines.
//!
//! The displayed timestamp is "when the server logged it", stamped once
//! per record at formatting time. Under buffering or latency it can
//! differ from the record's own capture timestamp; that is intentional.

use browserlog_protocol::LogRecord;
use chrono::Local;

/// Indentation marker for stack-frame and extra-data continuation lines.
const INDENT: &str = "    ";

/// Renders a record with the current wall-clock time.
///
/// Returns the full multi-line text, without a trailing newline.
pub fn format_record(record: &LogRecord) -> String {
    let time = Local::now().format("%H:%M:%S").to_string();
    render(record, &time).join("\n")
}

/// Pure rendering core, parameterized by the display time.
fn render(record: &LogRecord, time: &str) -> Vec<String> {
    let prefix = format!("{time} browser\t| ");

    let mut base = format!(
        "{prefix}[{}] {}",
        record.level.to_uppercase(),
        record.message
    );
    if !record.url.is_empty() {
        base.push_str(&format!(" ({})", record.url));
    }
    let mut lines = vec![base];

    // One continuation line per stack fragment, stacks in array order.
    for stack in &record.stacks {
        for fragment in stack.split('\n') {
            lines.push(format!("{prefix}{INDENT}{fragment}"));
        }
    }

    if !record.extra.is_empty() {
        lines.push(format!("{prefix}{INDENT}Extra data:"));
        if let Ok(pretty) = serde_json::to_string_pretty(&record.extra) {
            for fragment in pretty.lines() {
                lines.push(format!("{prefix}{INDENT}{fragment}"));
            }
        }
    }

    lines
}
