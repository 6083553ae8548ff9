//! Domain models for itemproc
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Item`] - An opaque input unit
//! - [`ProcessedItem`] - Normalized text or an absence marker
//! - [`ProcessingError`] / [`Diagnostic`] - Why an item was dropped
//! - [`ProcessingConfig`] / [`DatabaseConfig`] - Reserved configuration
//! - [`ItemQuery`] - Opaque store query

mod config;
mod diagnostic;
mod item;
mod query;

pub use config::{DatabaseConfig, ProcessingConfig};
pub use diagnostic::{Diagnostic, ProcessingError};
pub use item::{Item, ItemKind, ProcessedItem};
pub use query::ItemQuery;
