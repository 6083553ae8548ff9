//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the core processing logic
//! and the outside world (persistence, failure reporting).
//!
//! Implementations live in the `adapters` module.

mod diagnostic_sink;
mod item_store;

pub use diagnostic_sink::DiagnosticSink;
pub use item_store::{ItemStore, StoreBackend};

#[cfg(test)]
pub(crate) use diagnostic_sink::MockDiagnosticSink;
#[cfg(test)]
pub(crate) use item_store::MockItemStore;
