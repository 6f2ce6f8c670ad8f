//! Gateway layer: the HTTP adapter for the streaming chat endpoint.

pub mod client;
pub mod protocol;

/// Returns the gateway module name for smoke checks.
pub fn module_name() -> &'static str {
    "gateway"
}
