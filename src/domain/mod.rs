//! Domain layer: addresses, messages and their lifecycle rules.

pub mod address;
pub mod message;
pub mod status;
pub mod text;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
