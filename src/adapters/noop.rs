//! Placeholder store
//!
//! Accepts every batch and remembers nothing. This is the processor's
//! default persistence backend.

use crate::core::models::{ItemQuery, ProcessedItem};
use crate::core::ports::ItemStore;

/// Store that discards writes and always loads an empty sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl NoopStore {
    /// Create a new no-op store
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ItemStore for NoopStore {
    fn store(&self, items: &[ProcessedItem]) -> anyhow::Result<()> {
        log::debug!("noop store: discarding {} item(s)", items.len());
        Ok(())
    }

    fn load(&self, _query: &ItemQuery) -> anyhow::Result<Vec<ProcessedItem>> {
        Ok(Vec::new())
    }
}
