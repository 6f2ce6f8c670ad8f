//! Domain layer: core entities and session rules.

pub mod compose_state;
pub mod events;
pub mod intro_state;
pub mod message;
pub mod session_state;
pub mod transcript;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
