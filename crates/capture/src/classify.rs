//! Argument classification and record building.
//!
//! Console call arguments arrive as an explicit tagged variant rather
//! than duck-typed values: the caller states whether an argument is
//! plain text, error-like (message plus optional stack), structured
//! data, or some other primitive rendering.

use browserlog_protocol::LogRecord;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// One classified console call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleArg {
    /// An absent value; renders as the literal text `undefined`.
    Undefined,
    /// A string argument, passed through unchanged.
    Text(String),
    /// An error-shaped value: its display message plus an optional raw
    /// stack-trace block.
    ErrorLike {
        message: String,
        stack: Option<String>,
    },
    /// JSON-transmissible structured data; lands in the record's
    /// `extra` array with an indexed placeholder in the message.
    Structured(serde_json::Value),
    /// Any other primitive, already rendered to text.
    Primitive(String),
}

impl ConsoleArg {
    /// Classifies a string argument.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Classifies a non-string primitive by its display rendering.
    pub fn primitive(value: impl ToString) -> Self {
        Self::Primitive(value.to_string())
    }

    /// Classifies an error with its message and optional stack text.
    pub fn error_like(message: impl Into<String>, stack: Option<String>) -> Self {
        Self::ErrorLike {
            message: message.into(),
            stack,
        }
    }

    /// Classifies structured data via a JSON round-trip.
    ///
    /// Two-step strategy: serialize to a JSON value to guarantee
    /// transmissibility; if that fails (non-string map keys, non-finite
    /// floats), fall back to the argument's debug rendering as a
    /// primitive.
    pub fn structured<T: Serialize + std::fmt::Debug>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => Self::Structured(v),
            Err(_) => Self::Primitive(format!("{value:?}")),
        }
    }
}

/// Builds one wire record from a console call.
///
/// Per-argument text contributions are joined with single spaces to
/// form the message; error stacks and structured values are split out
/// into `stacks` and `extra`. The timestamp is stamped here, at call
/// time, in RFC 3339 form.
pub fn build_record(level: &str, args: &[ConsoleArg], url: &str, user_agent: &str) -> LogRecord {
    let mut parts = Vec::with_capacity(args.len());
    let mut stacks = Vec::new();
    let mut extra = Vec::new();

    for arg in args {
        match arg {
            ConsoleArg::Undefined => parts.push("undefined".to_string()),
            ConsoleArg::Text(s) => parts.push(s.clone()),
            ConsoleArg::ErrorLike { message, stack } => {
                parts.push(message.clone());
                if let Some(stack) = stack {
                    // Browsers repeat the message at the top of the
                    // stack; strip it so frames are not duplicated.
                    let frames = stack
                        .strip_prefix(message.as_str())
                        .unwrap_or(stack)
                        .trim_start();
                    if !frames.is_empty() {
                        stacks.push(frames.to_string());
                    }
                }
            }
            ConsoleArg::Structured(value) => {
                extra.push(value.clone());
                parts.push(format!("[extra#{}]", extra.len()));
            }
            ConsoleArg::Primitive(s) => parts.push(s.clone()),
        }
    }

    LogRecord {
        level: level.to_string(),
        message: parts.join(" "),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        url: url.to_string(),
        user_agent: user_agent.to_string(),
        stacks,
        extra,
    }
}
