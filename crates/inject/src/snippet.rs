//! Generated browser-side capture agent.

/// Page-level marker written by the snippet and checked at splice time.
///
/// Both flags are process-wide page state: set once, reset only by page
/// navigation, never torn down.
pub const INJECTION_MARKER: &str = "__browserlogInjected";

/// Page-level flag guarding console patching at execution time.
pub const ACTIVE_FLAG: &str = "__browserlogActive";

/// The embedded snippet template. One free variable: the port.
const TEMPLATE: &str = include_str!("snippet.js");

const PORT_PLACEHOLDER: &str = "__BROWSERLOG_PORT__";

/// Renders the capture snippet for the given ingestion port.
pub fn generate(port: u16) -> String {
    TEMPLATE.replace(PORT_PLACEHOLDER, &port.to_string())
}
