//! Adapter surface: the generated browser capture snippet, idempotent
//! splicing into emitted script assets, and the recognized
//! configuration options.
//!
//! A build-tool adapter is expected to: check [`ForwarderConfig::enabled`],
//! start a `browserlog-server` `LogServer` once per build session, and
//! splice [`generate`]'s output into each emitted script asset via
//! [`inject_file`]. The injection marker makes re-splicing a no-op, and
//! the snippet's own runtime guard collapses multiple injected copies
//! to a single active interceptor.

mod config;
mod snippet;
mod splice;

pub use config::ForwarderConfig;
pub use snippet::{ACTIVE_FLAG, INJECTION_MARKER, generate};
pub use splice::{InjectError, inject, inject_file};
