//! Use case layer: composing, dispatching and demonstrating messages.

pub mod bootstrap;
pub mod compose;
pub mod context;
pub mod contracts;
pub mod demo;
pub mod dispatch;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
