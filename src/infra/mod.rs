//! Infrastructure layer: config, logging, the delivery log file and the clock.

pub mod clock;
pub mod config;
pub mod contracts;
pub mod delivery_log;
pub mod error;
pub mod logging;
#[cfg(test)]
pub mod stubs;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
